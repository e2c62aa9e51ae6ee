//! Bubble Component
//!
//! Square speech-bubble tag. Floating bubbles bob up and down.

use dioxus::prelude::*;

use crate::theme::{classes, Biome};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BubbleSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl BubbleSize {
    pub fn class(&self) -> &'static str {
        match self {
            BubbleSize::Sm => "mc-bubble--sm",
            BubbleSize::Md => "mc-bubble--md",
            BubbleSize::Lg => "mc-bubble--lg",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct BubbleProps {
    #[props(default)]
    pub biome: Biome,
    #[props(default)]
    pub size: BubbleSize,
    #[props(default = false)]
    pub floating: bool,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    pub children: Element,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn Bubble(props: BubbleProps) -> Element {
    let mut base = format!("mc-bubble {} {}", props.size.class(), props.biome.class());
    if props.floating {
        base.push_str(" mc-bubble--floating");
    }
    if props.onclick.is_some() {
        base.push_str(" mc-bubble--clickable");
    }
    let full_class = classes(&base, props.class.as_deref());
    let vars = props.biome.palette().css_vars();

    rsx! {
        div {
            class: "{full_class}",
            style: "{vars}",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}
