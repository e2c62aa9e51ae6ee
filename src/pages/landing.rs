//! Landing page - skybox entry to the fest.
//!
//! Shows "Generating World..." while the scene settles, then the logo and
//! the EXPLORE button that leads to the events. Background music starts on
//! mount at the configured volume.

use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_config;
use crate::effects::BackgroundMusic;

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();
    let config = use_config();
    let mut loading = use_signal(|| true);

    let intro = config.intro_delay();
    use_hook(move || {
        spawn(async move {
            tokio::time::sleep(intro).await;
            loading.set(false);
        });
    });

    let music = BackgroundMusic::new(config.background_music.clone(), config.music_volume);
    use_hook(move || music.start());

    let mut pressed = use_signal(|| false);
    let explore = move |_| {
        tracing::info!("Explore pressed, entering events");
        navigator.push(Route::Events {});
    };

    rsx! {
        main { class: "landing",
            div { class: "landing__skybox" }

            if loading() {
                div { class: "landing__loading",
                    div { class: "landing__loading-text", "Generating World..." }
                }
            }

            div { class: "landing__overlay",
                img { class: "landing__logo", src: "/assets/logo.png", alt: "XPLORES" }
                button {
                    class: if pressed() { "explore-btn explore-btn--pressed" } else { "explore-btn" },
                    onmousedown: move |_| pressed.set(true),
                    onmouseup: move |_| pressed.set(false),
                    onmouseleave: move |_| pressed.set(false),
                    onclick: explore,
                    img { src: "/assets/button.png", alt: "EXPLORE" }
                    span { class: "explore-btn__label", "EXPLORE" }
                }
            }
        }
    }
}
