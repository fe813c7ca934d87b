//! Game Map placeholder.
//!
//! The world map is rendered by the map service; the dashboard reserves its
//! slot and shows the regions the player can explore.

use dioxus::prelude::*;

const REGIONS: [&str; 4] = ["Riverside", "Old Forest", "Coastline", "City Park"];

#[component]
pub fn GameMap() -> Element {
    rsx! {
        section { class: "game-map", "aria-label": "World map",
            div { class: "game-map-canvas",
                for region in REGIONS {
                    div { key: "{region}", class: "game-map-region",
                        span { class: "region-pin" }
                        span { class: "region-name", "{region}" }
                    }
                }
            }
        }
    }
}
