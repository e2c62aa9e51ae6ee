//! App context for Xplore'25.
//!
//! Config and catalog are resolved in `main` before the window opens and
//! installed here; components reach them through hooks.
//!
//! ## Usage
//!
//! ```ignore
//! // In page components
//! let catalog = use_catalog();
//! let cards = use_card_reveal();
//! cards.engine.on_item_activate(3);
//! ```

use std::sync::{Arc, OnceLock};

use dioxus::prelude::*;
use xplore_core::{CardRevealCarousel, Catalog, RenderState, XploreConfig};

use crate::effects::WebviewCue;

/// Everything resolved from the command line and config file
#[derive(Clone, Debug)]
pub struct AppContext {
    pub config: XploreConfig,
    pub catalog: Arc<Catalog>,
}

static APP_CONTEXT: OnceLock<AppContext> = OnceLock::new();

/// Install the resolved context. Only the first call has any effect.
pub fn install(ctx: AppContext) {
    if APP_CONTEXT.set(ctx).is_err() {
        tracing::warn!("App context already installed, ignoring");
    }
}

/// The installed context, or defaults with the built-in catalog
pub fn app_context() -> AppContext {
    APP_CONTEXT.get().cloned().unwrap_or_else(|| AppContext {
        config: XploreConfig::default(),
        catalog: Arc::new(Catalog::xplore25()),
    })
}

/// Hook to access the app context provided by [`crate::app::App`].
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
}

pub fn use_catalog() -> Arc<Catalog> {
    use_app_context().catalog
}

pub fn use_config() -> XploreConfig {
    use_app_context().config
}

/// Card-reveal engine bound to the calling component.
#[derive(Clone)]
pub struct CardReveal {
    pub engine: CardRevealCarousel,
    /// Latest render snapshot, updated whenever the engine publishes
    pub state: Signal<RenderState>,
}

/// Hook creating one [`CardRevealCarousel`] for the calling component.
///
/// The engine lives as long as the component. Its snapshots are mirrored
/// into a signal so the view re-renders on every transition, including the
/// timed expiry. Unmounting tears the engine down, cancelling any pending
/// countdown.
pub fn use_card_reveal() -> CardReveal {
    let ctx = use_app_context();

    let engine = use_hook(move || {
        let cue = Arc::new(WebviewCue::new(ctx.config.flip_sound.clone()));
        CardRevealCarousel::new(ctx.catalog.clone(), ctx.config.engine_options(cue))
    });

    let mut state = use_signal(|| engine.snapshot());

    let watched = engine.clone();
    use_hook(move || {
        let mut rx = watched.subscribe();
        spawn(async move {
            while rx.changed().await.is_ok() {
                let snapshot = rx.borrow_and_update().clone();
                state.set(snapshot);
            }
            tracing::debug!("Card reveal engine closed");
        });
    });

    let dropped = engine.clone();
    use_drop(move || dropped.teardown());

    CardReveal { engine, state }
}
