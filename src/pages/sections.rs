//! Section pages reached from the header links.
//!
//! Their content is served by other parts of the product; each page keeps
//! the header and a short introduction.

use dioxus::prelude::*;

use crate::components::Header;
use crate::context::use_session;

#[component]
fn SectionPage(title: String, blurb: String) -> Element {
    rsx! {
        Header {}

        main { class: "section-page",
            h1 { class: "section-title", "{title}" }
            p { class: "section-blurb", "{blurb}" }
        }
    }
}

#[component]
pub fn Community() -> Element {
    rsx! {
        SectionPage {
            title: "Community",
            blurb: "See what other explorers are doing for their neighbourhoods.",
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        SectionPage {
            title: "About EcoLoop",
            blurb: "EcoLoop rewards sustainable habits with streaks, coins and a healing world map.",
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        SectionPage {
            title: "Contact",
            blurb: "Questions or ideas? Write to the EcoLoop team.",
        }
    }
}

#[component]
pub fn Leaderboard() -> Element {
    rsx! {
        SectionPage {
            title: "Leaderboard",
            blurb: "Top explorers by streak and coins this week.",
        }
    }
}

#[component]
pub fn Store() -> Element {
    rsx! {
        SectionPage {
            title: "Store",
            blurb: "Spend coins on seeds, badges and map decorations.",
        }
    }
}

#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let name = session
        .read()
        .as_ref()
        .filter(|s| s.is_logged_in)
        .map(|s| s.username.clone())
        .unwrap_or_else(|| "Explorer".to_string());

    rsx! {
        SectionPage {
            title: "{name}",
            blurb: "Your badges, history and settings.",
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(path = %path, "Unknown route");

    rsx! {
        SectionPage {
            title: "Lost in the woods",
            blurb: "Nothing grows at {path} yet.",
        }
    }
}
