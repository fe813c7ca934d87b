//! Dashboard page - "World Explorer".
//!
//! Hosts the header and the game map. Signed-out visitors are returned to
//! the landing page.

use dioxus::prelude::*;
use ecoloop_core::{RenderMode, SessionGate};

use crate::app::Route;
use crate::components::{icons, GameMap, Header};
use crate::context::use_session;

#[component]
pub fn Dashboard() -> Element {
    let navigator = use_navigator();
    let session = use_session();

    use_effect(move || {
        if SessionGate::render(session.read().as_ref()) == RenderMode::Anonymous {
            tracing::debug!("No active session, leaving dashboard");
            navigator.replace(Route::Landing {});
        }
    });

    rsx! {
        div { class: "dashboard",
            Header {}

            main { class: "dashboard-main",
                div { class: "dashboard-intro",
                    div { class: "dashboard-heading",
                        span { class: "spin-slow", {icons::compass()} }
                        h1 { class: "dashboard-title", "World Explorer" }
                    }
                    p { class: "dashboard-tagline", "Complete challenges to heal the environment! 🌱" }
                }

                div { class: "dashboard-stage",
                    div { class: "glow glow-green" }
                    div { class: "glow glow-blue" }
                    GameMap {}
                }
            }
        }
    }
}
