use log::debug;
use stylist::css;
use yew::prelude::*;

use crate::carousel::slides::{Slide, SLIDES};
use crate::carousel::state::{CarouselAction, CarouselState};
use crate::carousel::timer;
use crate::config;
use crate::reveal;
use crate::motion::{Motion, Pose, SlideVariants, Transition};
use crate::theme;

const BENEFITS: [&str; 3] = [
    "Instant credit verification",
    "No monthly limits or caps",
    "Track earnings in real-time",
];

/// Pulse of the whole face and wobble of the glyph, both held back by
/// `delay_ms` so they play once the slide is visible.
fn face_motions(delay_ms: u32) -> (Motion, Motion) {
    let pulse = Motion::new(
        "slide-pulse",
        vec![Pose::REST, Pose::REST.with_scale(1.1), Pose::REST],
    )
    .with_transition(Transition::new(500).delay(delay_ms));
    let wobble = Motion::new(
        "glyph-wobble",
        vec![
            Pose::REST,
            Pose::REST.with_rotate(10.0),
            Pose::REST.with_rotate(-10.0),
            Pose::REST,
        ],
    )
    .with_transition(Transition::new(600).delay(delay_ms));
    (pulse, wobble)
}

/// How long the current slide waits before it starts to appear: nothing on
/// mount, otherwise until the outgoing slide has left.
fn entrance_delay(state: &CarouselState) -> u32 {
    match state.previous() {
        Some(_) => SlideVariants::slide_in(state.direction()).transition().delay_ms,
        None => 0,
    }
}

/// `entrance` is the delay before the face animates; `None` renders it still,
/// as for a slide on its way out.
fn slide_face(slide: &Slide, entrance: Option<u32>) -> Html {
    let (face_class, glyph_class) = match entrance.map(face_motions) {
        Some((pulse, wobble)) => (pulse.class(), wobble.class()),
        None => (Classes::new(), Classes::new()),
    };

    html! {
        <div class={classes!("slide-face", face_class)}>
            <div class={classes!("slide-glyph", glyph_class)}>{slide.emoji}</div>
            <p class="slide-title">{slide.title}</p>
        </div>
    }
}

#[function_component(ImageCarousel)]
pub fn image_carousel() -> Html {
    let state = use_reducer(CarouselState::default);

    // Auto-advance for as long as the carousel is mounted. The guard is moved
    // into the destructor, so unmounting always cancels the timer.
    {
        let dispatcher = state.dispatcher();
        let slide_count = state.slide_count();
        use_effect_with_deps(
            move |_| {
                debug!(
                    "Carousel mounted with {} slides, advancing every {}ms",
                    slide_count,
                    config::AUTO_ADVANCE_MS
                );
                let ticker = timer::every(config::AUTO_ADVANCE_MS, move || {
                    dispatcher.dispatch(CarouselAction::Tick)
                });
                move || {
                    debug!("Carousel unmounted, stopping auto-advance");
                    drop(ticker);
                }
            },
            (),
        );
    }

    // The info panel stays hidden until it is scrolled into view.
    let panel_ref = use_node_ref();
    let revealed = use_state(|| false);
    {
        let panel_ref = panel_ref.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let setter = revealed.setter();
                let observer = reveal::on_first_view(&panel_ref, move || setter.set(true));
                if observer.is_none() {
                    revealed.set(true);
                }
                move || drop(observer)
            },
            (),
        );
    }

    let current = &SLIDES[state.current()];
    let direction = state.direction();

    // The first slide is shown in place; later ones slide in once the
    // outgoing slide has left.
    let mut slides: Vec<Html> = Vec::with_capacity(2);
    if let Some(index) = state.previous() {
        let slide = &SLIDES[index];
        slides.push(html! {
            <div
                key={format!("exit-{}", slide.id)}
                class={classes!("slide", SlideVariants::slide_out(direction).class())}
                style={format!("background: {}; z-index: 0;", theme::gradient(slide.theme))}
                aria-hidden="true"
            >
                { slide_face(slide, None) }
            </div>
        });
    }
    let incoming_motion = state
        .previous()
        .map(|_| SlideVariants::slide_in(direction).class())
        .unwrap_or_default();
    slides.push(html! {
        <div
            key={format!("slide-{}", current.id)}
            class={classes!("slide", incoming_motion)}
            style={format!("background: {}; z-index: 1;", theme::gradient(current.theme))}
        >
            { slide_face(current, Some(entrance_delay(&state))) }
        </div>
    });

    let dots = SLIDES.iter().enumerate().map(|(index, slide)| {
        let active = index == state.current();
        let onclick = {
            let dispatcher = state.dispatcher();
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Select(index)))
        };
        html! {
            <button
                key={slide.id}
                class={classes!("carousel-dot", active.then_some("active"))}
                aria-label={format!("Show slide {}", slide.title)}
                aria-current={active.then_some("true")}
                {onclick}
            />
        }
    });

    let info_motion = Motion::between(
        "info-slide-in",
        Pose::REST.with_opacity(0.0).with_x(50.0),
        Pose::REST,
    )
    .with_transition(Transition::new(config::INFO_PANEL_MS));
    let info_class = if *revealed {
        info_motion.class()
    } else {
        classes!("reveal-pending")
    };

    let section = css!(
        r#"
        padding: 5rem 1rem;

        .carousel-inner {
            max-width: 72rem;
            margin: 0 auto;
        }

        h2 {
            font-size: 2.25rem;
            font-weight: 700;
            text-align: center;
            margin-bottom: 4rem;
        }

        .carousel-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
            gap: 3rem;
            align-items: center;
        }

        .carousel-frame {
            position: relative;
            aspect-ratio: 1 / 1;
            border-radius: 1.5rem;
            overflow: hidden;
            box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
        }

        .slide-stack {
            position: absolute;
            inset: 0;
        }

        .slide {
            position: absolute;
            inset: 0;
            display: flex;
            align-items: center;
            justify-content: center;
        }

        .slide-face {
            text-align: center;
        }

        .slide-glyph {
            font-size: 6rem;
            margin-bottom: 1rem;
        }

        .slide-title {
            font-size: 2.25rem;
            font-weight: 700;
            color: white;
        }

        .carousel-dots {
            position: absolute;
            bottom: 1rem;
            left: 50%;
            transform: translateX(-50%);
            z-index: 50;
            display: flex;
            gap: 0.5rem;
        }

        .carousel-dot {
            width: 0.75rem;
            height: 0.75rem;
            padding: 0;
            border: none;
            border-radius: 9999px;
            background: rgba(255, 255, 255, 0.4);
            cursor: pointer;
            transition: background 0.2s, transform 0.15s ease-out;
        }

        .carousel-dot.active {
            background: white;
        }

        .carousel-dot:hover {
            transform: scale(1.2);
        }

        .carousel-info.reveal-pending {
            opacity: 0;
            transform: translateX(50px);
        }

        .carousel-info h3 {
            font-size: 1.875rem;
            font-weight: 700;
        }

        .carousel-info p {
            font-size: 1.125rem;
            color: ${muted};
            line-height: 1.6;
        }

        .carousel-info ul {
            list-style: none;
            padding: 0;
        }

        .carousel-info li {
            display: flex;
            align-items: center;
            gap: 0.75rem;
            margin-bottom: 1rem;
            transition: transform 0.15s ease-out;
        }

        .carousel-info li:hover {
            transform: translateX(5px);
        }

        .check {
            color: ${primary};
            font-size: 1.25rem;
        }
        "#,
        muted = theme::MUTED_FOREGROUND,
        primary = theme::PRIMARY,
    );

    html! {
        <section class={section}>
            <div class="carousel-inner">
                <h2>{"Why You'll Love It"}</h2>

                <div class="carousel-grid">
                    <div class="carousel-frame">
                        <div class="slide-stack">
                            { for slides }
                        </div>

                        <div class="carousel-dots">
                            { for dots }
                        </div>
                    </div>

                    <div ref={panel_ref} class={classes!("carousel-info", info_class)}>
                        <h3>{format!("{} Credits Effortlessly", current.title)}</h3>
                        <p>
                            {"Our simple referral program lets you earn rewards without any complex steps. Share your unique link with friends, and watch your credits grow in real-time."}
                        </p>
                        <ul>
                            { for BENEFITS.iter().map(|item| html! {
                                <li key={*item}>
                                    <span class="check">{"✓"}</span>
                                    <span>{*item}</span>
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}
