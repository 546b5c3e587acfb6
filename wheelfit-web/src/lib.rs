pub mod api;
pub mod config;
pub mod error;
pub mod pages;
pub mod service;

use config::ApiConfig;
use dioxus::prelude::*;
use pages::FitmentPage;
use service::FitmentService;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    FitmentPage {},
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| FitmentService::new(ApiConfig::from_env()));

    rsx! {
        document::Title { "Virtual wheel fitment" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen bg-gray-900", Router::<Route> {} }
    }
}
