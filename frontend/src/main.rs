use log::info;
use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod motion;
mod reveal;
mod theme;
mod carousel {
    pub mod slides;
    pub mod state;
    pub mod timer;
}
mod components {
    pub mod hero_section;
    pub mod image_carousel;
    pub mod navigation;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let global = css!(
        r#"
        html {
            scroll-behavior: smooth;
        }

        body {
            margin: 0;
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
            background: ${background};
        }
        "#,
        background = theme::BACKGROUND,
    );

    html! {
        <BrowserRouter>
            <Global css={global} />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
