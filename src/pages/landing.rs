//! Landing page - the login call-to-action.
//!
//! Signed-in players are sent straight on to the dashboard.

use dioxus::prelude::*;
use ecoloop_core::{RenderMode, SessionGate};
use ecoloop_ui::{Button, ButtonVariant};

use crate::app::Route;
use crate::components::Header;
use crate::context::{demo_session, use_session};

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();
    let mut session = use_session();

    // Auto-redirect returning players to the game
    use_effect(move || {
        if SessionGate::render(session.read().as_ref()) == RenderMode::Authenticated {
            tracing::info!("Session already active, navigating to dashboard");
            navigator.push(Route::Dashboard {});
        }
    });

    let start = move |_: ()| {
        let player = demo_session();
        tracing::info!(username = %player.username, "Starting demo session");
        // The redirect effect above takes it from here
        session.set(Some(player));
    };

    rsx! {
        Header {}

        main { class: "landing",
            section { class: "landing-hero",
                h1 { class: "landing-title", "EcoLoop" }
                p { class: "tagline",
                    "Turn everyday eco-habits into a game. Build streaks, earn coins, heal the map."
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "landing-cta".to_string(),
                    onclick: start,
                    "Start playing"
                }
            }

            section { class: "landing-steps",
                div { class: "landing-step",
                    h2 { "Act" }
                    p { "Recycle, refill, ride. Small actions count." }
                }
                div { class: "landing-step",
                    h2 { "Scan" }
                    p { "Snap a photo with the eco-scanner as proof." }
                }
                div { class: "landing-step",
                    h2 { "Grow" }
                    p { "Keep your streak alive and watch the world recover." }
                }
            }
        }
    }
}
