//! Registration links - every event's form in one list.

use dioxus::prelude::*;
use xplore_core::{badge, open_registration};

use crate::components::{Coordinators, NavHeader, NavLocation};
use crate::context::use_catalog;
use crate::effects::WebviewLinkOpener;

#[component]
pub fn Links() -> Element {
    let catalog = use_catalog();

    rsx! {
        div { class: "links-page",
            NavHeader { current: NavLocation::Links }

            main { class: "links-page__main",
                div { class: "links-page__intro",
                    h1 { "Registration Links" }
                    p { "Click on any event name to register" }
                }

                div { class: "links-list",
                    for item in catalog.items().iter() {
                        LinkRow {
                            key: "{item.id}",
                            id: item.id,
                            title: item.title.clone(),
                            category: item.category.clone(),
                            has_form: catalog.registration_url(item.id).is_some(),
                        }
                    }
                }

                Coordinators {}
            }
        }
    }
}

#[component]
fn LinkRow(id: u32, title: String, category: String, has_form: bool) -> Element {
    let catalog = use_catalog();

    rsx! {
        div {
            class: if has_form { "links-list__row" } else { "links-list__row links-list__row--disabled" },
            onclick: move |_| {
                open_registration(&catalog, &WebviewLinkOpener, id);
            },
            div { class: "links-list__label",
                span { class: "links-list__badge", "{badge(id)}" }
                div {
                    h3 { "{title}" }
                    p { "{category}" }
                }
            }
            span { class: "links-list__arrow", "\u{2197}" }
        }
    }
}
