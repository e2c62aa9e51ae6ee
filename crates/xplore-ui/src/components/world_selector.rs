//! World Selector Component
//!
//! "My Worlds" menu: saved worlds listed with mode, last played and size,
//! each row tinted by its biome.

use dioxus::prelude::*;

use super::button::{ButtonSize, McButton};
use super::window::McWindow;
use crate::theme::Biome;

/// Saved world row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    pub name: &'static str,
    pub game_mode: &'static str,
    pub last_played: &'static str,
    pub size: &'static str,
    pub biome: Biome,
}

pub const WORLDS: [World; 4] = [
    World {
        name: "Sandstone Flat",
        game_mode: "Creative",
        last_played: "8/6/18",
        size: "0.02MB",
        biome: Biome::Desert,
    },
    World {
        name: "Cherry Grove Paradise",
        game_mode: "Survival",
        last_played: "8/5/18",
        size: "1.2MB",
        biome: Biome::Cherry,
    },
    World {
        name: "Nether Fortress",
        game_mode: "Hardcore",
        last_played: "8/4/18",
        size: "0.8MB",
        biome: Biome::Nether,
    },
    World {
        name: "Ice Spikes Tundra",
        game_mode: "Survival",
        last_played: "8/3/18",
        size: "2.1MB",
        biome: Biome::Ice,
    },
];

#[derive(Clone, PartialEq, Props)]
pub struct WorldSelectorProps {
    #[props(default = WORLDS.to_vec())]
    pub worlds: Vec<World>,
    /// Called with the index of the clicked world
    #[props(default)]
    pub on_select: Option<EventHandler<usize>>,
}

#[component]
pub fn WorldSelector(props: WorldSelectorProps) -> Element {
    let mut selected = use_signal(|| None::<usize>);
    let on_select = props.on_select;

    rsx! {
        div { class: "mc-worlds",
            McWindow { title: "My Worlds".to_string(), biome: Biome::Barren,
                McButton { biome: Biome::Barren, size: ButtonSize::Wide, "Create New" }
                div { class: "mc-worlds__list",
                    for (index, world) in props.worlds.iter().enumerate() {
                        div {
                            key: "{world.name}",
                            class: "{world_class(world, selected() == Some(index))}",
                            style: "{world.biome.palette().css_vars()}",
                            onclick: move |_| {
                                selected.set(Some(index));
                                if let Some(handler) = &on_select {
                                    handler.call(index);
                                }
                            },
                            div { class: "mc-world__info",
                                div { class: "mc-world__thumb" }
                                div {
                                    div { class: "mc-world__name", "{world.name}" }
                                    div { class: "mc-world__mode", "{world.game_mode}" }
                                }
                            }
                            div { class: "mc-world__meta",
                                div { "{world.last_played}" }
                                div { "{world.size}" }
                            }
                        }
                    }
                }
                div { class: "mc-worlds__tabs",
                    McButton { biome: Biome::Barren, "My Worlds" }
                    McButton { biome: Biome::Barren, "Friends & Realms" }
                    McButton { biome: Biome::Barren, "Servers" }
                }
            }
        }
    }
}

fn world_class(world: &World, selected: bool) -> String {
    if selected {
        format!("mc-world mc-world--selected {}", world.biome.class())
    } else {
        format!("mc-world {}", world.biome.class())
    }
}
