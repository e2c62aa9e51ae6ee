use dioxus::prelude::*;

use crate::context::use_catalog;

/// "Student Coordinators" footer listing every contact in the catalog
#[component]
pub fn Coordinators() -> Element {
    let catalog = use_catalog();

    if catalog.coordinators().is_empty() {
        return rsx! {};
    }

    rsx! {
        footer { class: "coordinators",
            h4 { class: "coordinators__title", "Student Coordinators" }
            div { class: "coordinators__list",
                for coordinator in catalog.coordinators().iter() {
                    div { key: "{coordinator.name}", class: "coordinators__card",
                        h5 { "{coordinator.name}" }
                        a { href: tel_href(&coordinator.phone), "{coordinator.phone}" }
                    }
                }
            }
        }
    }
}

/// `tel:` link with the digit grouping removed
fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", digits)
}
