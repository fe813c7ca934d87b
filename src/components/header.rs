//! Header Component
//!
//! Anonymous: brand, About/Contact links, Login pill.
//! Authenticated: brand, primary nav, streak/coin stats, tool icons,
//! profile, logout, and the three overlays.
//!
//! All decisions come from [`HeaderOrchestrator`]; this component only
//! renders its [`HeaderView`] and forwards clicks as commands.

use dioxus::prelude::*;
use ecoloop_core::{HeaderOrchestrator, HeaderView, NavEntry, OverlayId, PROFILE_PATH};
use ecoloop_ui::{ButtonVariant, IconButton, Indicator, StatBadge, StatKind};

use crate::app::{route_for, Route};
use crate::components::icons;
use crate::components::{ChallengesModal, ScannerModal, StreakCalendar};
use crate::context::{use_session, RouterNavigator, SignalSession};

type Orchestrator = HeaderOrchestrator<SignalSession, RouterNavigator>;

#[component]
pub fn Header() -> Element {
    let session = use_session();
    let navigator = use_navigator();
    let path = use_route::<Route>().to_string();
    let mut current_path = use_signal(|| path.clone());

    // Lives as long as the header is mounted
    let mut header: Signal<Orchestrator> = use_signal(|| {
        HeaderOrchestrator::new(
            SignalSession::new(session),
            RouterNavigator::new(navigator, current_path),
        )
    });

    // Overlays never outlive the page they were opened on
    use_effect(use_reactive((&path,), move |(path,)| {
        if *current_path.peek() != path {
            current_path.set(path);
        }
        header.write().on_route_changed();
    }));

    // Re-gate whenever the session changes
    use_effect(move || {
        let signed_in = session.read().as_ref().is_some_and(|s| s.is_logged_in);
        tracing::debug!(signed_in, "Session changed");
        header.write().on_session_changed();
    });

    let view: HeaderView = header.read().view();

    rsx! {
        header { class: "app-header",
            div { class: "app-header-inner",
                // Left: brand and primary nav
                div { class: "header-left",
                    Link { to: route_for(view.brand_target), class: "brand",
                        span { class: "brand-mark", {icons::leaf()} }
                        span { class: "brand-name", "EcoLoop" }
                    }

                    if view.mode.is_authenticated() {
                        nav { class: "primary-nav",
                            for entry in view.nav.iter() {
                                NavLinkItem { key: "{entry.item.path}", entry: entry.clone() }
                            }
                        }
                    }
                }

                // Right: stats and actions
                div { class: "header-right",
                    if let Some(surface) = view.authenticated.clone() {
                        div { class: "stats-group",
                            StatBadge {
                                kind: StatKind::Streak,
                                value: surface.streak as u64,
                                onclick: move |_| header.write().open(OverlayId::StreakCalendar),
                            }
                            span { class: "stats-divider" }
                            StatBadge { kind: StatKind::Coins, value: surface.coins }
                        }

                        div { class: "tools-group",
                            IconButton {
                                aria_label: OverlayId::Scanner.title().to_string(),
                                class: "tool-scanner".to_string(),
                                indicator: Indicator::Pulse,
                                onclick: move |_| header.write().open(OverlayId::Scanner),
                                {icons::camera()}
                            }
                            IconButton {
                                aria_label: OverlayId::Challenges.title().to_string(),
                                class: "tool-challenges".to_string(),
                                indicator: Indicator::Alert,
                                onclick: move |_| header.write().open(OverlayId::Challenges),
                                {icons::target()}
                            }

                            for tool in surface.tools.iter().filter(|t| t.item.path != PROFILE_PATH) {
                                Link {
                                    key: "{tool.item.path}",
                                    to: route_for(tool.item.path),
                                    class: if tool.active { "icon-btn btn-tool active" } else { "icon-btn btn-tool" },
                                    span { class: "tool-icon", title: "{tool.item.label}", {tool_icon(tool.item.path)} }
                                }
                            }

                            span { class: "tools-divider" }

                            Link { to: Route::Profile {}, class: "profile-link",
                                span { class: "avatar", title: "{surface.username}", "👩‍🎓" }
                            }

                            IconButton {
                                aria_label: "Logout".to_string(),
                                variant: ButtonVariant::Danger,
                                onclick: move |_| header.write().logout(),
                                {icons::log_out()}
                            }
                        }
                    } else {
                        div { class: "anon-links",
                            for entry in view.nav.iter() {
                                Link {
                                    key: "{entry.item.path}",
                                    to: route_for(entry.item.path),
                                    class: if entry.item.label == "Login" { "btn-primary login-cta" } else { "anon-link" },
                                    "{entry.item.label}"
                                }
                            }
                        }
                    }
                }
            }
        }

        // Overlays are only mounted for a signed-in player
        if let Some(surface) = view.authenticated.as_ref() {
            ScannerModal {
                is_open: view.is_open(OverlayId::Scanner),
                on_close: move |_| header.write().close(OverlayId::Scanner),
            }
            ChallengesModal {
                is_open: view.is_open(OverlayId::Challenges),
                on_close: move |_| header.write().close(OverlayId::Challenges),
            }
            StreakCalendar {
                is_open: view.is_open(OverlayId::StreakCalendar),
                streak: surface.streak,
                on_close: move |_| header.write().close(OverlayId::StreakCalendar),
            }
        }
    }
}

#[component]
fn NavLinkItem(entry: NavEntry) -> Element {
    rsx! {
        Link {
            to: route_for(entry.item.path),
            class: if entry.active { "nav-link active" } else { "nav-link" },
            "{entry.item.label}"
        }
    }
}

fn tool_icon(path: &str) -> Element {
    match path {
        "/leaderboard" => icons::trophy(),
        "/store" => icons::shopping_bag(),
        _ => rsx! {},
    }
}
