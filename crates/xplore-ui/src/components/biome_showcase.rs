//! Biome Showcase
//!
//! One window per biome with its description and an explore button, plus a
//! compact picker used by the showcase page.

use dioxus::prelude::*;

use super::bubble::{Bubble, BubbleSize};
use super::button::{ButtonSize, McButton};
use super::window::McWindow;
use crate::theme::Biome;

#[derive(Clone, PartialEq, Props)]
pub struct BiomeShowcaseProps {
    /// Called with the biome whose explore button was pressed
    #[props(default)]
    pub on_explore: Option<EventHandler<Biome>>,
}

#[component]
pub fn BiomeShowcase(props: BiomeShowcaseProps) -> Element {
    let on_explore = props.on_explore;

    rsx! {
        div { class: "mc-showcase-grid",
            for biome in Biome::ALL {
                McWindow { key: "{biome.key()}", title: biome.label().to_string(), biome: biome, class: "mc-showcase-grid__item".to_string(),
                    p { class: "mc-text", "{biome.description()}" }
                    McButton {
                        biome: biome,
                        size: ButtonSize::Wide,
                        onclick: move |_| {
                            tracing::debug!(biome = %biome, "Explore pressed");
                            if let Some(handler) = &on_explore {
                                handler.call(biome);
                            }
                        },
                        "Explore {biome.label()}"
                    }
                }
            }
        }
    }
}

/// Row of floating biome bubbles; the selected one is drawn large
#[component]
pub fn BiomePicker(selected: Biome, on_pick: EventHandler<Biome>) -> Element {
    rsx! {
        div { class: "mc-biome-picker",
            for biome in Biome::ALL {
                Bubble {
                    key: "{biome.key()}",
                    biome: biome,
                    size: if biome == selected { BubbleSize::Lg } else { BubbleSize::Sm },
                    floating: biome == selected,
                    onclick: move |_| on_pick.call(biome),
                    "{biome.icon()} {biome.label()}"
                }
            }
        }
    }
}
