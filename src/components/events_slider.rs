//! Narrow-layout slider: one card per slide with arrows and dots.
//!
//! The slide index lives in the card-reveal engine, so wrap-around and
//! out-of-range dots behave exactly as the engine defines.

use dioxus::prelude::*;
use xplore_core::{CardRevealCarousel, RenderState};

use crate::components::EventCard;
use crate::context::use_catalog;

#[component]
pub fn EventsSlider(state: ReadOnlySignal<RenderState>) -> Element {
    let catalog = use_catalog();
    let engine = use_context::<CardRevealCarousel>();

    let snapshot = state();
    let active = snapshot.active_index;
    let offset = active * 100;

    let prev = {
        let engine = engine.clone();
        move |_| engine.on_prev()
    };
    let next = {
        let engine = engine.clone();
        move |_| engine.on_next()
    };

    rsx! {
        div { class: "events-slider",
            div { class: "events-slider__viewport",
                div {
                    class: "events-slider__track",
                    style: "transform: translateX(-{offset}%);",
                    for item in catalog.items().iter() {
                        div { key: "{item.id}", class: "events-slider__slide",
                            EventCard {
                                item: item.clone(),
                                hidden_ref: catalog.hidden_ref(item.id),
                                revealed: snapshot.is_revealed(item.id),
                                tall: true,
                            }
                        }
                    }
                }
            }
            button {
                class: "events-slider__arrow events-slider__arrow--prev",
                "aria-label": "Previous event",
                onclick: prev,
                "\u{2039}"
            }
            button {
                class: "events-slider__arrow events-slider__arrow--next",
                "aria-label": "Next event",
                onclick: next,
                "\u{203A}"
            }
            div { class: "events-slider__dots",
                for index in 0..catalog.len() {
                    SliderDot { key: "{index}", index, active: index == active }
                }
            }
        }
    }
}

#[component]
fn SliderDot(index: usize, active: bool) -> Element {
    let engine = use_context::<CardRevealCarousel>();

    rsx! {
        button {
            class: if active { "slider-dot slider-dot--active" } else { "slider-dot" },
            "aria-label": "Go to event {index + 1}",
            onclick: move |_| engine.on_go_to(index),
        }
    }
}
