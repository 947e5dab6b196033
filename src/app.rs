use dioxus::prelude::*;

use crate::context::Catalogue;
use crate::pages::Chronicle;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The whole site; sections are addressed by in-page anchors
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Chronicle {},
}

/// Root application component.
///
/// Provides global styles, the catalogue context, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(Catalogue::shipped);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
