use dioxus::prelude::*;

use crate::context::ReaderContext;
use crate::get_settings;
use crate::pages::{GuideView, Library};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Library of guides with saved markers
/// - `/guide/:slug` - One guide with its outline, progress and preferences
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Library {},
    #[route("/guide/:slug")]
    GuideView { slug: String },
}

/// Root application component.
///
/// Provides global styles, the reader context, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(|| ReaderContext::load(&get_settings()));

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
