//! Window Component
//!
//! Game-menu style window with a title bar and optional close button.

use dioxus::prelude::*;

use super::button::CloseButton;
use crate::theme::{classes, Biome};

#[derive(Clone, PartialEq, Props)]
pub struct McWindowProps {
    /// Title bar text
    pub title: String,
    pub children: Element,
    #[props(default)]
    pub biome: Biome,
    /// Shows a close button in the title bar when set
    #[props(default)]
    pub on_close: Option<EventHandler<()>>,
    #[props(default)]
    pub class: Option<String>,
}

/// Bordered window with a coloured title bar
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     McWindow { title: "Rules".to_string(), biome: Biome::Grassland,
///         ul { li { "No breaking bedrock" } }
///     }
/// }
/// ```
#[component]
pub fn McWindow(props: McWindowProps) -> Element {
    let full_class = classes(
        &format!("mc-window {}", props.biome.class()),
        props.class.as_deref(),
    );
    let vars = props.biome.palette().css_vars();

    rsx! {
        div { class: "{full_class}", style: "{vars}",
            div { class: "mc-window__titlebar",
                span { class: "mc-window__title", "{props.title}" }
                if let Some(on_close) = props.on_close {
                    CloseButton { onclick: move |_| on_close.call(()) }
                }
            }
            div { class: "mc-window__body", {props.children} }
        }
    }
}
