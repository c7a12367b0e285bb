pub mod pages;
pub mod theme;

use dioxus::prelude::*;
use mucat_core::{ApiConfig, AppState, MusicLoader};
use pages::{AppLayout, MusicList};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    MusicList {},
}

#[component]
pub fn App() -> Element {
    use_context_provider(AppState::default);
    // Same-origin requests; only valid in the browser
    use_context_provider(|| MusicLoader::new(ApiConfig::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
