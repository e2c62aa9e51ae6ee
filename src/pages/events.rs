//! Events page - the card reveal experience.
//!
//! Wide layouts show every event in a flip-card grid; narrow layouts show the
//! same cards in a slider. Both read one engine: revealing a card in either
//! shows it revealed in both, and the shared countdown turns them all back.

use dioxus::prelude::*;
use xplore_core::CardRevealCarousel;

use crate::components::{Coordinators, EventCard, EventModal, EventsHero, EventsSlider};
use crate::context::{use_card_reveal, use_catalog};

/// Events page component.
#[component]
pub fn Events() -> Element {
    let catalog = use_catalog();
    let cards = use_card_reveal();
    use_context_provider(|| cards.engine.clone());

    let state = cards.state;
    let snapshot = state();

    rsx! {
        div { class: "events-page",
            EventsHero {}

            section { class: "events-section",
                div { class: "events-section__intro",
                    h3 { "Discover our Events" }
                    p { "Click on any card to reveal the event details" }
                }

                div { class: "events-grid",
                    for item in catalog.items().iter() {
                        EventCard {
                            key: "{item.id}",
                            item: item.clone(),
                            hidden_ref: catalog.hidden_ref(item.id),
                            revealed: snapshot.is_revealed(item.id),
                        }
                    }
                }

                EventsSlider { state }

                if !snapshot.revealed.is_empty() {
                    ResetButton {}
                }

                Coordinators {}
            }

            if let Some(id) = snapshot.selection {
                EventModal { id }
            }
        }
    }
}

/// Turns every revealed card back immediately
#[component]
fn ResetButton() -> Element {
    let engine = use_context::<CardRevealCarousel>();

    rsx! {
        button {
            class: "events-section__reset",
            onclick: move |_| engine.clear_reveals(),
            "Hide all cards"
        }
    }
}
