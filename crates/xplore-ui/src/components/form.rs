//! Form Components
//!
//! Biome-tinted forms: an outer panel, labelled inputs and textareas.
//! Inputs are dark stone fields that glow in the biome highlight on focus.

use dioxus::prelude::*;

use crate::theme::{classes, Biome};

#[derive(Clone, PartialEq, Props)]
pub struct McFormProps {
    #[props(default)]
    pub biome: Biome,
    /// Called on submit; default browser navigation is suppressed
    #[props(default)]
    pub onsubmit: Option<EventHandler<()>>,
    pub children: Element,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn McForm(props: McFormProps) -> Element {
    let full_class = classes(
        &format!("mc-form {}", props.biome.class()),
        props.class.as_deref(),
    );
    let vars = props.biome.palette().css_vars();

    rsx! {
        form {
            class: "{full_class}",
            style: "{vars}",
            onsubmit: move |e| {
                e.prevent_default();
                if let Some(handler) = &props.onsubmit {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Properties for the McInput component
#[derive(Clone, PartialEq, Props)]
pub struct McInputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, email, password, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default)]
    pub biome: Biome,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
}

/// Labelled single-line input
///
/// # Example
///
/// ```rust,ignore
/// let mut name = use_signal(String::new);
///
/// rsx! {
///     McInput {
///         value: name(),
///         oninput: move |s| name.set(s),
///         label: "Player Name".to_string(),
///         placeholder: "Steve".to_string(),
///     }
/// }
/// ```
#[component]
pub fn McInput(props: McInputProps) -> Element {
    let id = props.id.clone().unwrap_or_else(|| field_id("input"));

    rsx! {
        div { class: "mc-field {props.biome.class()}",
            if let Some(label) = &props.label {
                label { class: "mc-field__label", r#for: "{id}", "{label}" }
            }
            input {
                id: "{id}",
                class: "mc-input",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct McTextareaProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,
    #[props(default)]
    pub biome: Biome,
    #[props(default)]
    pub id: Option<String>,
}

#[component]
pub fn McTextarea(props: McTextareaProps) -> Element {
    let id = props.id.clone().unwrap_or_else(|| field_id("textarea"));

    rsx! {
        div { class: "mc-field {props.biome.class()}",
            if let Some(label) = &props.label {
                label { class: "mc-field__label", r#for: "{id}", "{label}" }
            }
            textarea {
                id: "{id}",
                class: "mc-input mc-input--textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Random element id for label association
fn field_id(prefix: &str) -> String {
    format!("{}-{}", prefix, rand::random::<u32>() % 1_000_000)
}
