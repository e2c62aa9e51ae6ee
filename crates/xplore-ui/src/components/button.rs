//! Button Components
//!
//! Bevelled block buttons:
//! - McButton: biome-coloured gradient block with a lift on hover
//! - IconButton / CloseButton: small square stone buttons

use dioxus::prelude::*;

use crate::theme::{classes, Biome};

/// Button sizes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Regular,
    /// Full-width call to action
    Wide,
}

impl ButtonSize {
    /// Returns the CSS class for this size
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "mc-button--small",
            ButtonSize::Regular => "mc-button--regular",
            ButtonSize::Wide => "mc-button--wide",
        }
    }
}

/// Properties for the McButton component
#[derive(Clone, PartialEq, Props)]
pub struct McButtonProps {
    /// Palette
    #[props(default)]
    pub biome: Biome,
    #[props(default)]
    pub size: ButtonSize,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Block-style button
///
/// # Design Notes
///
/// - 4px bevel: highlight on top/left, dark border on bottom/right
/// - Gradient from the biome's light to base colour
/// - Pixelated rendering, monospace bold label
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     McButton {
///         biome: Biome::Nether,
///         onclick: move |_| explore(),
///         "Explore the Nether"
///     }
/// }
/// ```
#[component]
pub fn McButton(props: McButtonProps) -> Element {
    let base = format!("mc-button {} {}", props.size.class(), props.biome.class());
    let full_class = classes(&base, props.class.as_deref());
    let vars = props.biome.palette().css_vars();

    rsx! {
        button {
            class: "{full_class}",
            style: "{vars}",
            r#type: "{props.button_type}",
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

/// Icon button for compact actions (close, arrows, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = classes("mc-icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            "aria-label": "{props.aria_label}",
            onclick: move |e| {
                e.stop_propagation();
                props.onclick.call(());
            },
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
            class: "mc-close-btn".to_string(),
            "\u{00D7}"
        }
    }
}
