//! Flip card for one event.
//!
//! Face down it shows the mystery artwork and a "Reveal" button; face up it
//! shows the event art, category, badge and a "Learn More" button. Clicking
//! anywhere on the card goes through the engine, so a face-up card opens its
//! details and a face-down card flips.

use dioxus::prelude::*;
use xplore_core::{badge, CardRevealCarousel, ContentItem};

#[derive(Props, Clone, PartialEq)]
pub struct EventCardProps {
    pub item: ContentItem,
    /// Face-down artwork
    pub hidden_ref: String,
    pub revealed: bool,
    /// Slider cards are taller
    #[props(default = false)]
    pub tall: bool,
}

#[component]
pub fn EventCard(props: EventCardProps) -> Element {
    let engine = use_context::<CardRevealCarousel>();
    let id = props.item.id;
    let tag = badge(id);

    let activate = {
        let engine = engine.clone();
        move |_| {
            engine.on_item_activate(id);
        }
    };
    let learn_more = move |e: MouseEvent| {
        e.stop_propagation();
        engine.open_detail(id);
    };

    let mut card_class = String::from("flip-card");
    if props.tall {
        card_class.push_str(" flip-card--tall");
    }
    let inner_class = if props.revealed {
        "flip-card__inner flip-card__inner--flipped"
    } else {
        "flip-card__inner"
    };

    rsx! {
        div { class: "{card_class}", onclick: activate,
            div { class: "{inner_class}",
                // Face down
                div { class: "flip-card__face flip-card__face--front",
                    div { class: "flip-card__art",
                        img { src: "{props.hidden_ref}", alt: "Hidden Event" }
                    }
                    div { class: "flip-card__meta",
                        span { class: "pill pill--dark", "Mystery" }
                        span { class: "flip-card__badge", "{tag}" }
                    }
                    h3 { class: "flip-card__title", "Hidden Event" }
                    p { class: "flip-card__text", "Click to discover what's behind this card" }
                    button { class: "flip-card__button flip-card__button--light", "Reveal" }
                }
                // Face up
                div { class: "flip-card__face flip-card__face--back",
                    div { class: "flip-card__art",
                        img { src: "{props.item.image_ref}", alt: "{props.item.title}" }
                    }
                    div { class: "flip-card__meta",
                        span { class: "pill", "{props.item.category}" }
                        span { class: "flip-card__badge", "{tag}" }
                    }
                    h3 { class: "flip-card__title clamp-2", "{props.item.title}" }
                    p { class: "flip-card__text clamp-3", "{props.item.description}" }
                    button {
                        class: "flip-card__button",
                        onclick: learn_more,
                        "Learn More"
                    }
                }
            }
        }
    }
}
