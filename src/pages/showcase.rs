//! Showcase page - the block component library in every biome.
//!
//! A bubble row picks the biome; every demo below follows it.

use dioxus::prelude::*;
use xplore_ui::{
    BarColor, Biome, BiomePicker, BiomeShowcase, Bubble, BubbleSize, ButtonSize, CardVariant,
    ImageCarousel, InventoryGrid, InventoryItem, InventorySlot, McBackground, McButton, McCard,
    McForm, McInput, McTextarea, McWindow, ProgressBar, Slide, WorldSelector,
};

use crate::components::{NavHeader, NavLocation};

const LOOT: [&str; 8] = [
    "\u{2694}\u{FE0F}",
    "\u{1F6E1}\u{FE0F}",
    "\u{1F3F9}",
    "\u{1F356}",
    "\u{1F48E}",
    "\u{1FA93}",
    "\u{26CF}\u{FE0F}",
    "\u{1F9EA}",
];

fn hotbar() -> Vec<Option<InventoryItem>> {
    LOOT.iter()
        .enumerate()
        .map(|(i, icon)| Some(InventoryItem::new(*icon).with_count(if i % 3 == 0 { 16 } else { 1 })))
        .collect()
}

fn arena_slides() -> Vec<Slide> {
    vec![
        Slide::new("/assets/3.jpg", "Arena layout")
            .titled("Arena Layout")
            .described("Symmetric lanes, resource spawns, and mid control points."),
        Slide::new("/assets/capturetheflag.png", "Base and crafting table")
            .titled("Base & Crafting Table")
            .described("Protect your table with walls and traps. Coordinate defenses."),
        Slide::new("/assets/capture_the_craft_table_poster.png", "Resource routes")
            .titled("Resource Routes")
            .described("Plan rotations to gear up faster than your opponents."),
    ]
}

#[component]
pub fn Showcase() -> Element {
    let mut biome = use_signal(Biome::default);
    let mut name = use_signal(String::new);
    let mut server = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut joined = use_signal(|| None::<String>);

    let current = biome();

    rsx! {
        McBackground { biome: current,
            NavHeader { current: NavLocation::Showcase, biome: current }

            main { class: "showcase",
                div { class: "showcase__header",
                    h1 { "Block Components" }
                    BiomePicker { selected: current, on_pick: move |b| biome.set(b) }
                }

                McForm {
                    biome: current,
                    onsubmit: move |_| {
                        let player = name();
                        tracing::info!(player = %player, server = %server(), "Join requested");
                        joined.set(Some(player));
                    },
                    h3 { class: "mc-form__title", "Interactive Form Demo" }
                    McInput {
                        biome: current,
                        label: "Player Name".to_string(),
                        placeholder: "Enter your username".to_string(),
                        value: name(),
                        oninput: move |s| name.set(s),
                    }
                    McInput {
                        biome: current,
                        label: "Server IP".to_string(),
                        placeholder: "play.example.com".to_string(),
                        value: server(),
                        oninput: move |s| server.set(s),
                    }
                    McTextarea {
                        biome: current,
                        label: "Message".to_string(),
                        placeholder: "Tell us about your adventures...".to_string(),
                        value: message(),
                        oninput: move |s| message.set(s),
                    }
                    McButton { biome: current, button_type: "submit".to_string(), "Join Server" }
                    if let Some(player) = joined() {
                        Bubble { biome: current, size: BubbleSize::Sm, "Welcome, {player}!" }
                    }
                }

                div { class: "showcase__grid",
                    McCard { biome: current, title: "Buttons".to_string(), icon: "\u{1F518}".to_string(), variant: CardVariant::Elevated,
                        McButton { biome: current, size: ButtonSize::Wide, "Primary Action" }
                        McButton { biome: current, disabled: true, "Disabled Button" }
                        McButton { biome: current, size: ButtonSize::Small, "Small" }
                    }
                    McCard { biome: current, title: "Inventory".to_string(), icon: "\u{1F392}".to_string(), variant: CardVariant::Elevated,
                        InventoryGrid { biome: current, items: hotbar(), rows: 1, cols: 9 }
                    }
                    McCard { biome: current, title: "Bubbles".to_string(), icon: "\u{1F4AC}".to_string(), variant: CardVariant::Elevated,
                        Bubble { biome: current, size: BubbleSize::Sm, "Small" }
                        Bubble { biome: current, size: BubbleSize::Md, "Medium" }
                        Bubble { biome: current, size: BubbleSize::Lg, floating: true, "Floating Bubble!" }
                    }
                    McCard { biome: current, title: "Progress".to_string(), icon: "\u{2B50}".to_string(), variant: CardVariant::Flat,
                        ProgressBar { value: 80.0, color: BarColor::Red }
                        ProgressBar { value: 65.0, color: BarColor::Green }
                        ProgressBar { value: 40.0, color: BarColor::Blue }
                        ProgressBar { value: 25.0, color: BarColor::Orange }
                        ProgressBar { value: 120.0, color: BarColor::Purple }
                    }
                }

                McWindow { title: "Nested Window".to_string(), biome: current,
                    div { class: "showcase__row",
                        InventorySlot { item: "\u{1F9F1}".to_string(), count: 64, biome: current }
                        InventorySlot { item: "\u{1F48E}".to_string(), count: 3, biome: current }
                        InventorySlot { biome: current }
                    }
                }

                section { class: "showcase__section",
                    h2 { "Capture the Crafting Table" }
                    ImageCarousel { biome: current, slides: arena_slides() }
                }

                section { class: "showcase__section",
                    h2 { "Worlds" }
                    WorldSelector { on_select: move |index: usize| tracing::debug!(index, "World selected") }
                }

                section { class: "showcase__section",
                    h2 { "Biomes" }
                    BiomeShowcase { on_explore: move |b| biome.set(b) }
                }
            }
        }
    }
}
