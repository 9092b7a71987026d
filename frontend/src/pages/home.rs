use stylist::css;
use yew::prelude::*;

use crate::components::{
    hero_section::HeroSection, image_carousel::ImageCarousel, navigation::Navigation,
};
use crate::theme;

#[function_component(Home)]
pub fn home() -> Html {
    // Start at the top on first visit, even if the browser restored a scroll
    // position from a previous session.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let page = css!(
        r#"
        background: ${background};
        color: ${foreground};
        "#,
        background = theme::BACKGROUND,
        foreground = theme::FOREGROUND,
    );

    html! {
        <main class={page}>
            <Navigation />
            <HeroSection />
            <ImageCarousel />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn composes_navigation_hero_and_carousel_in_order() {
        let rendered = yew::ServerRenderer::<Home>::new().render().await;

        let nav = rendered.find("<nav").expect("navigation missing");
        let hero = rendered.find("Start Referring").expect("hero missing");
        let carousel = rendered.find("Credits Effortlessly").expect("carousel missing");
        assert!(nav < hero && hero < carousel);
    }
}
