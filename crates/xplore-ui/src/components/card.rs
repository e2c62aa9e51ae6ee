//! Card Component
//!
//! Dark translucent panel with an optional icon + title header.

use dioxus::prelude::*;

use crate::theme::{classes, Biome};

/// Card elevation variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CardVariant {
    /// Regular drop shadow
    #[default]
    Default,
    /// Deep shadow, grows on hover
    Elevated,
    /// No shadow
    Flat,
}

impl CardVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            CardVariant::Default => "mc-card--default",
            CardVariant::Elevated => "mc-card--elevated",
            CardVariant::Flat => "mc-card--flat",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct McCardProps {
    #[props(default)]
    pub title: Option<String>,
    /// Glyph shown before the title
    #[props(default)]
    pub icon: Option<String>,
    #[props(default)]
    pub biome: Biome,
    #[props(default)]
    pub variant: CardVariant,
    pub children: Element,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn McCard(props: McCardProps) -> Element {
    let full_class = classes(
        &format!("mc-card {} {}", props.variant.class(), props.biome.class()),
        props.class.as_deref(),
    );
    let vars = props.biome.palette().css_vars();

    rsx! {
        div { class: "{full_class}", style: "{vars}",
            if let Some(title) = &props.title {
                div { class: "mc-card__header",
                    if let Some(icon) = &props.icon {
                        span { class: "mc-card__icon", "{icon}" }
                    }
                    h3 { class: "mc-card__title", "{title}" }
                }
            }
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_variant_classes() {
        assert_eq!(CardVariant::Default.class(), "mc-card--default");
        assert_eq!(CardVariant::Elevated.class(), "mc-card--elevated");
        assert_eq!(CardVariant::Flat.class(), "mc-card--flat");
    }
}
