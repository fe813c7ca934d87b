use dioxus::prelude::*;
use ecoloop_core::SessionState;

use crate::context::load_initial_session;
use crate::pages::{
    About, Community, Contact, Dashboard, Landing, Leaderboard, NotFound, Profile, Store,
};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with the login call-to-action
/// - `/dashboard` - Game view ("Play")
/// - `/community`, `/about`, `/contact` - Primary nav sections
/// - `/leaderboard`, `/store`, `/profile` - Header tool links
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/community")]
    Community {},
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},
    #[route("/leaderboard")]
    Leaderboard {},
    #[route("/store")]
    Store {},
    #[route("/profile")]
    Profile {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Resolve one of the static header paths to a route.
pub fn route_for(path: &str) -> Route {
    path.parse::<Route>().unwrap_or(Route::Landing {})
}

/// Root application component.
///
/// Provides global styles, the session store, and routing.
#[component]
pub fn App() -> Element {
    let session: Signal<Option<SessionState>> = use_signal(load_initial_session);

    // The header and pages read the session through this context
    use_context_provider(|| session);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
