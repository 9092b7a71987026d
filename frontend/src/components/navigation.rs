use stylist::css;
use yew::prelude::*;

use crate::config;
use crate::motion::{Motion, Pose, Transition};
use crate::theme;

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let drop_in = Motion::between(
        "nav-drop-in",
        Pose::REST.with_opacity(0.0).with_y(-20.0),
        Pose::REST,
    )
    .with_transition(Transition::new(config::NAV_ENTRANCE_MS));

    let bar = css!(
        r#"
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        background: rgba(255, 248, 251, 0.8);
        backdrop-filter: blur(12px);
        border-bottom: 1px solid ${border};

        .nav-inner {
            max-width: 72rem;
            margin: 0 auto;
            padding: 1rem 2rem;
            display: flex;
            justify-content: space-between;
            align-items: center;
        }

        .nav-brand {
            font-size: 1.5rem;
            font-weight: 700;
            background: linear-gradient(to right, ${primary}, ${accent});
            -webkit-background-clip: text;
            background-clip: text;
            color: transparent;
            transition: transform 0.2s ease-out;
        }

        .nav-brand:hover {
            transform: scale(1.05);
        }

        .nav-links {
            display: flex;
            gap: 1.5rem;
            align-items: center;
        }

        .nav-link {
            color: ${muted};
            text-decoration: none;
            transition: color 0.2s;
        }

        .nav-link:hover {
            color: ${primary};
        }

        .nav-cta {
            background: ${primary};
            color: white;
            border: none;
            padding: 0.5rem 1.5rem;
            border-radius: 9999px;
            font-weight: 600;
            cursor: pointer;
            transition: transform 0.15s ease-out;
        }

        .nav-cta:hover {
            transform: scale(1.05);
        }

        .nav-cta:active {
            transform: scale(0.95);
        }
        "#,
        border = theme::BORDER,
        primary = theme::PRIMARY,
        accent = theme::ACCENT,
        muted = theme::MUTED_FOREGROUND,
    );

    html! {
        <nav class={classes!(bar, drop_in.class())}>
            <div class="nav-inner">
                <div class="nav-brand">{"Refer Earn"}</div>
                <div class="nav-links">
                    <a href="#features" class="nav-link">{"Features"}</a>
                    <a href="#stats" class="nav-link">{"Stats"}</a>
                    <button class="nav-cta">{"Get Started"}</button>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn renders_brand_links_and_cta() {
        let rendered = yew::ServerRenderer::<Navigation>::new().render().await;

        assert!(rendered.contains("Refer Earn"));
        assert!(rendered.contains(r##"href="#features""##));
        assert!(rendered.contains(r##"href="#stats""##));
        assert!(rendered.contains("Get Started"));
    }

    #[tokio::test]
    async fn links_come_before_the_call_to_action() {
        let rendered = yew::ServerRenderer::<Navigation>::new().render().await;

        let features = rendered.find("Features");
        let stats = rendered.find("Stats");
        let cta = rendered.find("Get Started");
        assert!(features < stats && stats < cta, "{}", rendered);
    }
}
