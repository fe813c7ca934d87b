//! Overlay Frame Component
//!
//! Shared shell for the header overlays: dimmed backdrop, centred panel,
//! title bar with a close button. The frame knows nothing about what is
//! inside; it only honours `is_open` and reports dismissal via `on_close`.
//!
//! The panel takes keyboard focus when it mounts so Escape works without a
//! click first.

use dioxus::prelude::*;
use ecoloop_core::OverlayId;

use super::CloseButton;

/// How an overlay was dismissed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dismissal {
    Backdrop,
    Escape,
    CloseButton,
}

impl Dismissal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dismissal::Backdrop => "backdrop",
            Dismissal::Escape => "escape",
            Dismissal::CloseButton => "close-button",
        }
    }

    /// The dismissal a key press on the panel maps to, if any.
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Escape => Some(Dismissal::Escape),
            _ => None,
        }
    }
}

fn dismiss(overlay: OverlayId, how: Dismissal, on_close: EventHandler<()>) {
    tracing::debug!(overlay = %overlay, via = how.as_str(), "Overlay dismissed");
    on_close.call(());
}

#[derive(Props, Clone, PartialEq)]
pub struct OverlayFrameProps {
    /// Which overlay this frame hosts (title and CSS hook)
    pub overlay: OverlayId,
    /// Whether the overlay is visible
    pub is_open: bool,
    /// Backdrop click, Escape, or the close button
    pub on_close: EventHandler<()>,
    /// Optional line under the title
    #[props(default)]
    pub subtitle: Option<String>,
    pub children: Element,
}

/// Modal shell
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     OverlayFrame {
///         overlay: OverlayId::Challenges,
///         is_open: props.is_open,
///         on_close: props.on_close,
///         ChallengeList {}
///     }
/// }
/// ```
#[component]
pub fn OverlayFrame(props: OverlayFrameProps) -> Element {
    if !props.is_open || props.overlay == OverlayId::None {
        return rsx! {};
    }

    let on_close = props.on_close;
    let overlay = props.overlay;
    let panel_class = format!("overlay-panel overlay-{}", props.overlay.slug());

    rsx! {
        div {
            class: "overlay-backdrop",
            onclick: move |_| dismiss(overlay, Dismissal::Backdrop, on_close),
        }

        div {
            class: "{panel_class}",
            role: "dialog",
            "aria-modal": "true",
            "aria-label": props.overlay.title(),
            tabindex: "-1",
            onmounted: move |e: MountedEvent| async move {
                if e.set_focus(true).await.is_err() {
                    tracing::debug!(overlay = %overlay, "Could not focus overlay panel");
                }
            },
            onkeydown: move |e: KeyboardEvent| {
                if let Some(how) = Dismissal::from_key(&e.key()) {
                    dismiss(overlay, how, on_close);
                }
            },

            header { class: "overlay-header",
                div { class: "overlay-heading",
                    h2 { class: "overlay-title", "{props.overlay.title()}" }
                    if let Some(subtitle) = props.subtitle.as_ref() {
                        p { class: "overlay-subtitle", "{subtitle}" }
                    }
                }
                CloseButton { onclick: move |_| dismiss(overlay, Dismissal::CloseButton, on_close) }
            }

            div { class: "overlay-body", {props.children} }
        }
    }
}
