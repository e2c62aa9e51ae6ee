//! Site header: grass-block logo, title, nav slot and status line.

use dioxus::prelude::*;

use crate::theme::Biome;

#[derive(Clone, PartialEq, Props)]
pub struct SiteHeaderProps {
    pub title: String,
    /// Navigation links, rendered on wide layouts only
    #[props(default = VNode::empty())]
    pub nav: Element,
    /// Short status text on the right
    #[props(default)]
    pub status: Option<String>,
    #[props(default)]
    pub biome: Biome,
}

#[component]
pub fn SiteHeader(props: SiteHeaderProps) -> Element {
    let vars = props.biome.palette().css_vars();

    rsx! {
        header { class: "mc-header {props.biome.class()}", style: "{vars}",
            div { class: "mc-header__inner",
                div { class: "mc-header__brand",
                    div { class: "mc-header__logo" }
                    h1 { class: "mc-header__title", "{props.title}" }
                }
                nav { class: "mc-header__nav", {props.nav} }
                if let Some(status) = &props.status {
                    span { class: "mc-header__status", "{status}" }
                }
            }
        }
    }
}
