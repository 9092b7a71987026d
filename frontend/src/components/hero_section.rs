use stylist::css;
use yew::prelude::*;

use crate::config;
use crate::motion::{Easing, Motion, Pose, Repeat, Stagger, Transition};
use crate::theme;

const STAGGER: Stagger = Stagger {
    delay_children_ms: config::HERO_CHILDREN_DELAY_MS,
    stagger_ms: config::HERO_STAGGER_MS,
};

/// Fade-and-rise entrance for the `index`th child of the hero block.
fn rise(index: usize) -> Motion {
    Motion::between(
        "hero-rise",
        Pose::REST.with_opacity(0.0).with_y(20.0),
        Pose::REST,
    )
    .with_transition(Transition::new(config::HERO_CHILD_MS).delay(STAGGER.delay_for(index)))
}

/// Slow there-and-back drift of a background blob. `sign` picks the
/// diagonal it travels along.
fn drift(name: &str, sign: f64, delay_ms: u32) -> Motion {
    Motion::between(
        name,
        Pose::REST,
        Pose::REST.with_x(30.0 * sign).with_y(30.0 * sign),
    )
    .with_transition(
        Transition::new(config::HERO_BLOB_DRIFT_MS / 2)
            .delay(delay_ms)
            .easing(Easing::EaseInOut)
            .repeat(Repeat::Forever { alternate: true }),
    )
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let fade = Motion::between("hero-fade", Pose::REST.with_opacity(0.0), Pose::REST)
        .with_transition(Transition::new(config::HERO_FADE_MS).easing(Easing::Linear));

    let section = css!(
        r#"
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 5rem 1rem 0;
        position: relative;
        overflow: hidden;

        .hero-blob {
            position: absolute;
            width: 18rem;
            height: 18rem;
            border-radius: 9999px;
            mix-blend-mode: multiply;
            filter: blur(64px);
            opacity: 0.2;
        }

        .hero-blob.top {
            top: 5rem;
            right: 2.5rem;
            background: ${secondary};
        }

        .hero-blob.bottom {
            bottom: 5rem;
            left: 2.5rem;
            background: ${primary};
        }

        .hero-content {
            text-align: center;
            z-index: 10;
            max-width: 56rem;
        }

        h1 {
            font-size: clamp(3rem, 7vw, 4.5rem);
            font-weight: 700;
            line-height: 1.15;
            margin-bottom: 1.5rem;
        }

        .gradient-text {
            -webkit-background-clip: text;
            background-clip: text;
            color: transparent;
        }

        .gradient-text.love {
            background-image: linear-gradient(to right, ${primary}, ${accent});
        }

        .gradient-text.credits {
            background-image: linear-gradient(to right, ${accent}, ${primary});
        }

        .hero-subtitle {
            font-size: 1.25rem;
            color: ${muted};
            line-height: 1.6;
            margin-bottom: 2rem;
        }

        .hero-cta-group {
            display: flex;
            flex-wrap: wrap;
            gap: 1rem;
            justify-content: center;
        }

        .hero-cta {
            padding: 1rem 2rem;
            border-radius: 9999px;
            font-weight: 600;
            font-size: 1.125rem;
            cursor: pointer;
            transition: transform 0.15s ease-out, box-shadow 0.15s ease-out, background 0.2s;
        }

        .hero-cta.primary {
            background: ${primary};
            color: white;
            border: none;
        }

        .hero-cta.primary:hover {
            transform: scale(1.05);
            box-shadow: 0 20px 40px rgba(255, 107, 157, 0.3);
        }

        .hero-cta.outline {
            background: transparent;
            color: ${primary};
            border: 2px solid ${primary};
        }

        .hero-cta.outline:hover {
            transform: scale(1.05);
            background: ${muted_bg};
        }

        .hero-cta:active {
            transform: scale(0.95);
        }
        "#,
        primary = theme::PRIMARY,
        secondary = theme::SECONDARY,
        accent = theme::ACCENT,
        muted = theme::MUTED_FOREGROUND,
        muted_bg = theme::MUTED,
    );

    html! {
        <section class={section}>
            <div class={classes!("hero-blob", "top", drift("hero-drift-out", 1.0, 0).class())}></div>
            <div class={classes!("hero-blob", "bottom", drift("hero-drift-in", -1.0, 1_000).class())}></div>

            <div class={classes!("hero-content", fade.class())}>
                <h1 class={rise(0).class()}>
                    {"Share the "}
                    <span class="gradient-text love">{"Love"}</span>
                    {", "}
                    <span class="gradient-text credits">{"Earn Credits"}</span>
                </h1>

                <p class={classes!("hero-subtitle", rise(1).class())}>
                    {"Invite your friends and earn rewards instantly. No limits, no catches. Just pure referral bliss."}
                </p>

                <div class={classes!("hero-cta-group", rise(2).class())}>
                    <button class="hero-cta primary">{"Start Referring"}</button>
                    <button class="hero-cta outline">{"Learn More"}</button>
                </div>
            </div>
        </section>
    }
}
