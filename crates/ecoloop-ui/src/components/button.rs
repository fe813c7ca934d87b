//! Button Components
//!
//! - Primary: leaf-green pill, used for "Login" and modal actions
//! - Ghost: text-only secondary action
//! - Danger: muted icon that turns red on hover (logout)
//! - Tool: round header tool icon

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Leaf-green pill with shadow
    #[default]
    Primary,
    /// Subtle/secondary action
    Ghost,
    /// Destructive action (logout)
    Danger,
    /// Round icon slot in the header tools group
    Tool,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Danger => "btn-danger",
            ButtonVariant::Tool => "btn-tool",
        }
    }
}

/// Small dot pinned to the corner of an icon button
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Indicator {
    /// Pulsing blue dot (new scanner features)
    Pulse,
    /// Static red dot (unread challenges)
    Alert,
}

impl Indicator {
    pub fn class(&self) -> &'static str {
        match self {
            Indicator::Pulse => "indicator indicator-pulse",
            Indicator::Alert => "indicator indicator-alert",
        }
    }
}

fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         onclick: move |_| navigator.push(Route::Dashboard {}),
///         "Start playing"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_class(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact header actions
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (usually an inline SVG)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label, also shown as the tooltip
    pub aria_label: String,
    #[props(default = ButtonVariant::Tool)]
    pub variant: ButtonVariant,
    /// Optional corner dot
    #[props(default)]
    pub indicator: Option<Indicator>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_class(
        &format!("icon-btn {}", props.variant.class()),
        props.class.as_deref(),
    );

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            title: "{props.aria_label}",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            if let Some(indicator) = props.indicator {
                span { class: indicator.class() }
            }
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            variant: ButtonVariant::Ghost,
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}
