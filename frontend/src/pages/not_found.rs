use stylist::css;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::theme;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let page = css!(
        r#"
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        text-align: center;
        padding: 0 1rem;
        color: ${foreground};

        h1 {
            font-size: 2.25rem;
            font-weight: 700;
            margin-bottom: 1rem;
        }

        p {
            color: ${muted};
        }

        a {
            color: ${primary};
            font-weight: 600;
        }
        "#,
        foreground = theme::FOREGROUND,
        muted = theme::MUTED_FOREGROUND,
        primary = theme::PRIMARY,
    );

    html! {
        <div class={page}>
            <h1>{"Page not found"}</h1>
            <p>
                {"There is nothing here. "}
                <Link<Route> to={Route::Home}>{"Back to the start"}</Link<Route>>
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew_router::history::{AnyHistory, MemoryHistory};
    use yew_router::Router;

    #[function_component]
    fn Routed() -> Html {
        html! {
            <Router history={AnyHistory::from(MemoryHistory::new())}>
                <NotFound />
            </Router>
        }
    }

    #[tokio::test]
    async fn links_back_home_with_scoped_styles() {
        let rendered = yew::ServerRenderer::<Routed>::new().render().await;

        assert!(rendered.contains("Page not found"));
        assert!(rendered.contains(r#"href="/""#), "{}", rendered);
        assert!(!rendered.contains("not-found"));
    }
}
