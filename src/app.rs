use dioxus::prelude::*;

use crate::context::app_context;
use crate::pages::{Events, Landing, Links, Showcase};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Skybox landing with the EXPLORE button
/// - `/events` - Hero, flip-card grid / slider and event details
/// - `/links` - Registration links and coordinators
/// - `/showcase` - Component gallery across all biomes
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/events")]
    Events {},
    #[route("/links")]
    Links {},
    #[route("/showcase")]
    Showcase {},
}

/// Root application component.
///
/// Provides global styles, the app context and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(app_context);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
