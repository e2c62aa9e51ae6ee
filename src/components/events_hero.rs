//! Events Hero
//!
//! Full-width intro video over a poster image, with the page headline.

use dioxus::prelude::*;
use xplore_core::{HeroMedia, HERO_FALLBACK_DELAY};

use crate::app::Route;
use crate::components::{NavHeader, NavLocation};

#[component]
pub fn EventsHero() -> Element {
    let mut media = use_signal(HeroMedia::new);

    // Media events sometimes never fire; show the clip anyway after a grace period
    use_hook(move || {
        spawn(async move {
            tokio::time::sleep(HERO_FALLBACK_DELAY).await;
            media.write().on_fallback_timeout();
        });
    });

    let state = media();
    let poster_class = if state.show_poster() {
        "hero__poster"
    } else {
        "hero__poster hero__poster--hidden"
    };
    let headline_class = if state.has_ended() {
        "hero__headline hero__headline--gradient"
    } else {
        "hero__headline"
    };

    rsx! {
        section { class: "hero",
            video {
                class: "hero__video",
                autoplay: true,
                muted: true,
                playsinline: true,
                preload: "auto",
                poster: "/assets/homebg.jpg",
                onloadeddata: move |_| media.write().on_loaded(),
                oncanplay: move |_| media.write().on_can_play(),
                onended: move |_| media.write().on_ended(),
                onerror: move |_| media.write().on_error(),
                source { src: "/assets/hero.mp4", r#type: "video/mp4" }
            }
            div { class: "{poster_class}" }

            div { class: "hero__content",
                NavHeader { current: NavLocation::Events }
                div { class: "hero__titles",
                    h2 { class: "{headline_class}", "{state.headline()}" }
                    p { class: "hero__tagline", "{state.tagline()}" }
                    Link { to: Route::Links {}, class: "hero__cta", "Register Now" }
                }
            }
            div { class: "hero__shade" }
        }
    }
}
