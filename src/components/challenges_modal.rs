//! Challenges Modal Component
//!
//! Today's eco-challenge prompts. Progress and rewards are tracked by the
//! game service; this panel only lists them.

use dioxus::prelude::*;
use ecoloop_core::OverlayId;
use ecoloop_ui::OverlayFrame;

/// A challenge prompt shown in the list
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ChallengePrompt {
    pub title: &'static str,
    pub detail: &'static str,
    pub category: &'static str,
}

pub const DAILY_CHALLENGES: [ChallengePrompt; 4] = [
    ChallengePrompt {
        title: "Refill, don't rebuy",
        detail: "Use a reusable bottle or cup all day.",
        category: "waste",
    },
    ChallengePrompt {
        title: "Five-minute shower",
        detail: "Keep today's shower under five minutes.",
        category: "water",
    },
    ChallengePrompt {
        title: "Car-free errand",
        detail: "Walk, cycle, or take transit for one trip.",
        category: "carbon",
    },
    ChallengePrompt {
        title: "Sort the bin",
        detail: "Separate recyclables from general waste.",
        category: "waste",
    },
];

#[component]
pub fn ChallengesModal(
    /// Whether the overlay is visible
    is_open: bool,
    /// Dismissal callback
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        OverlayFrame {
            overlay: OverlayId::Challenges,
            is_open: is_open,
            on_close: on_close,
            subtitle: "Complete challenges to heal the environment".to_string(),

            ul { class: "challenge-list",
                for challenge in DAILY_CHALLENGES.iter() {
                    li { key: "{challenge.title}", class: "challenge-item",
                        span { class: "challenge-category category-{challenge.category}", "{challenge.category}" }
                        div { class: "challenge-text",
                            h3 { class: "challenge-title", "{challenge.title}" }
                            p { class: "challenge-detail", "{challenge.detail}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn challenge_titles_are_unique() {
        let mut titles: Vec<_> = DAILY_CHALLENGES.iter().map(|c| c.title).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), DAILY_CHALLENGES.len());
    }
}
