//! Image Carousel Component
//!
//! Framed gallery with prev/next arrows, dot navigation and an `n / len`
//! counter. Indexing wraps in both directions.

use dioxus::prelude::*;
use xplore_core::CarouselState;

use crate::theme::{classes, Biome};

/// One gallery slide
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slide {
    pub src: String,
    pub alt: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Slide {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            title: None,
            description: None,
        }
    }

    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Heading above the frame; untitled slides fall back to "Image Gallery"
pub fn slide_heading(slide: Option<&Slide>) -> &str {
    slide
        .and_then(|s| s.title.as_deref())
        .unwrap_or("Image Gallery")
}

#[derive(Clone, PartialEq, Props)]
pub struct ImageCarouselProps {
    pub slides: Vec<Slide>,
    #[props(default)]
    pub biome: Biome,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn ImageCarousel(props: ImageCarouselProps) -> Element {
    let len = props.slides.len();
    let mut carousel = use_signal(|| CarouselState::new(len));

    // Slide list changed under us; restart from the first slide
    if carousel.peek().len() != len {
        carousel.set(CarouselState::new(len));
    }

    let active = carousel.read().active();
    let current = props.slides.get(active).cloned();
    let heading = slide_heading(current.as_ref()).to_string();
    let full_class = classes(
        &format!("mc-gallery {}", props.biome.class()),
        props.class.as_deref(),
    );
    let vars = props.biome.palette().css_vars();

    rsx! {
        div { class: "{full_class}", style: "{vars}",
            div { class: "mc-gallery__header",
                h3 { class: "mc-gallery__title", "{heading}" }
                div { class: "mc-gallery__dots",
                    for index in 0..len {
                        button {
                            key: "{index}",
                            class: if index == active { "mc-dot mc-dot--active" } else { "mc-dot" },
                            "aria-label": "Go to slide {index + 1}",
                            onclick: move |_| {
                                carousel.write().go_to(index);
                            },
                        }
                    }
                }
            }
            div { class: "mc-gallery__frame",
                if let Some(slide) = &current {
                    img { key: "{active}", class: "mc-gallery__image", src: "{slide.src}", alt: "{slide.alt}" }
                }
                button {
                    class: "mc-gallery__arrow mc-gallery__arrow--prev",
                    "aria-label": "Previous",
                    onclick: move |_| carousel.write().prev(),
                    "\u{2039}"
                }
                button {
                    class: "mc-gallery__arrow mc-gallery__arrow--next",
                    "aria-label": "Next",
                    onclick: move |_| carousel.write().next(),
                    "\u{203A}"
                }
            }
            if let Some(description) = current.as_ref().and_then(|s| s.description.clone()) {
                div { key: "desc-{active}", class: "mc-gallery__caption",
                    p { "{description}" }
                }
            }
            if len > 0 {
                div { class: "mc-gallery__counter", "{active + 1} / {len}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_falls_back() {
        assert_eq!(slide_heading(None), "Image Gallery");
        assert_eq!(slide_heading(Some(&Slide::new("/a.png", "a"))), "Image Gallery");
        let titled = Slide::new("/a.png", "a").titled("Spawn");
        assert_eq!(slide_heading(Some(&titled)), "Spawn");
    }
}
