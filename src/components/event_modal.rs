//! Event Detail Modal
//!
//! Poster, category, badge, description and Register button on the left;
//! event rules followed by the fest-wide rules on the right.

use dioxus::prelude::*;
use xplore_core::{badge, open_registration, CardRevealCarousel, ItemId, RuleSection, RuleTone};
use xplore_ui::CloseButton;

use crate::context::use_catalog;
use crate::effects::WebviewLinkOpener;

/// Event Detail Modal
///
/// Rendered while the engine has a selection. Closing (X button, backdrop
/// click or Escape) goes through the engine so the selection clears; the
/// reveal set is left alone.
///
/// # Example
///
/// ```rust,ignore
/// if let Some(id) = state.read().selection {
///     EventModal { id }
/// }
/// ```
#[component]
pub fn EventModal(
    /// Selected event
    id: ItemId,
) -> Element {
    let catalog = use_catalog();
    let engine = use_context::<CardRevealCarousel>();

    // Selection is always a catalog id; anything else renders nothing
    let Some(item) = catalog.get(id).cloned() else {
        return rsx! {};
    };

    let poster = catalog.poster_ref(id);
    let rules = catalog.rules(id).to_vec();
    let general = catalog.general_rules().to_vec();
    let has_form = catalog.registration_url(id).is_some();

    let close = {
        let engine = engine.clone();
        move |_| engine.on_detail_close()
    };
    let close_button = {
        let engine = engine.clone();
        move |_| engine.on_detail_close()
    };
    let on_key = move |e: KeyboardEvent| {
        if e.key() == Key::Escape {
            engine.on_detail_close();
        }
    };
    let register = move |_| {
        open_registration(&catalog, &WebviewLinkOpener, id);
    };

    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "0",
            onclick: close,
            onkeydown: on_key,

            div {
                class: "event-modal",
                onclick: move |e| e.stop_propagation(),

                CloseButton { onclick: close_button }

                div { class: "event-modal__body",
                    div { class: "event-modal__main",
                        div { class: "event-modal__poster",
                            img { src: "{poster}", alt: "{item.title}" }
                        }
                        div { class: "flip-card__meta",
                            span { class: "pill", "{item.category}" }
                            span { class: "flip-card__badge", "{badge(id)}" }
                        }
                        h3 { class: "event-modal__title", "{item.title}" }
                        p { class: "event-modal__text", "{item.description}" }
                        button {
                            class: "event-modal__register",
                            disabled: !has_form,
                            onclick: register,
                            "Register"
                        }
                    }

                    div { class: "event-modal__rules",
                        h4 { "Event Details & Rules" }
                        for (index, section) in rules.into_iter().chain(general).enumerate() {
                            RuleBlock { key: "{index}", section }
                        }
                    }
                }
            }
        }
    }
}

/// CSS modifier for a rule section's colour scheme
fn tone_class(tone: RuleTone) -> &'static str {
    match tone {
        RuleTone::Format => "rule-block--format",
        RuleTone::Criteria => "rule-block--criteria",
        RuleTone::General => "rule-block--general",
        RuleTone::Notice => "rule-block--notice",
    }
}

#[component]
fn RuleBlock(section: RuleSection) -> Element {
    rsx! {
        div { class: "rule-block {tone_class(section.tone)}",
            h5 { "{section.heading}" }
            ul {
                for (index, point) in section.points.iter().enumerate() {
                    li { key: "{index}", "\u{2022} {point}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_tone_has_its_own_class() {
        let tones = [RuleTone::Format, RuleTone::Criteria, RuleTone::General, RuleTone::Notice];
        let mut classes: Vec<_> = tones.iter().map(|t| tone_class(*t)).collect();
        classes.dedup();
        assert_eq!(classes.len(), 4);
    }
}
