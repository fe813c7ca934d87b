//! Stat Badge Component
//!
//! Compact icon + number pair for the header stats group.

use dioxus::prelude::*;

/// Which metric a badge shows
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatKind {
    /// Consecutive active days
    Streak,
    /// Coin balance
    Coins,
}

impl StatKind {
    /// Tooltip / accessible label
    pub fn label(&self) -> &'static str {
        match self {
            StatKind::Streak => "View Streak",
            StatKind::Coins => "Coins",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            StatKind::Streak => "stat-badge stat-streak",
            StatKind::Coins => "stat-badge stat-coins",
        }
    }
}

/// Properties for the StatBadge component
#[derive(Clone, PartialEq, Props)]
pub struct StatBadgeProps {
    pub kind: StatKind,
    pub value: u64,
    /// Makes the badge clickable (the streak badge opens the calendar)
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
}

/// Displays one header metric
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StatBadge { kind: StatKind::Coins, value: 120 }
/// }
/// ```
#[component]
pub fn StatBadge(props: StatBadgeProps) -> Element {
    let clickable = props.onclick.is_some();

    rsx! {
        div {
            class: if clickable { "{props.kind.class()} clickable" } else { "{props.kind.class()}" },
            title: props.kind.label(),
            role: if clickable { "button" } else { "status" },
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            span { class: "stat-icon", {stat_icon(props.kind)} }
            span { class: "stat-value", "{props.value}" }
        }
    }
}

fn stat_icon(kind: StatKind) -> Element {
    match kind {
        StatKind::Streak => rsx! {
            // Lucide flame icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "16",
                height: "16",
                view_box: "0 0 24 24",
                fill: "currentColor",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M8.5 14.5A2.5 2.5 0 0 0 11 12c0-1.38-.5-2-1-3-1.072-2.143-.224-4.054 2-6 .5 2.5 2 4.9 4 6.5 2 1.6 3 3.5 3 5.5a7 7 0 1 1-14 0c0-1.153.433-2.294 1-3a2.5 2.5 0 0 0 2.5 2.5z" }
            }
        },
        StatKind::Coins => rsx! {
            // Lucide coins icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "16",
                height: "16",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                circle { cx: "8", cy: "8", r: "6" }
                path { d: "M18.09 10.37A6 6 0 1 1 10.34 18" }
                path { d: "M7 6h1v4" }
                path { d: "m16.71 13.88.7.71-2.82 2.82" }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_labels() {
        assert_eq!(StatKind::Streak.label(), "View Streak");
        assert_eq!(StatKind::Coins.label(), "Coins");
    }

    #[test]
    fn stat_classes_share_base() {
        assert!(StatKind::Streak.class().starts_with("stat-badge "));
        assert!(StatKind::Coins.class().starts_with("stat-badge "));
        assert_ne!(StatKind::Streak.class(), StatKind::Coins.class());
    }
}
