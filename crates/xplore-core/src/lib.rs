//! Xplore'25 Core Library
//!
//! Event catalog and the card-reveal / carousel interaction engine behind the
//! Xplore'25 tech fest site.
//!
//! ## Overview
//!
//! The events page shows a grid of face-down cards. Clicking a card flips it
//! and plays a sound; clicking a flipped card opens its detail view with the
//! poster, rules and registration link. All flipped cards turn back after a
//! shared delay. Narrow layouts show the same events as a wrap-around slider.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use xplore_core::{CardRevealCarousel, Catalog, EngineOptions};
//!
//! #[tokio::main]
//! async fn main() {
//!     let engine = CardRevealCarousel::new(Arc::new(Catalog::xplore25()), EngineOptions::default());
//!
//!     engine.on_item_activate(5);
//!     engine.on_item_activate(5);
//!     assert_eq!(engine.snapshot().selection, Some(5));
//! }
//! ```

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod effects;
pub mod error;
pub mod hero;
pub mod interaction;
pub mod reveal;
pub mod timer;

// Re-exports
pub use carousel::CarouselState;
pub use catalog::{badge, Catalog, ContentItem, Coordinator, DetailItem, ItemId, RuleSection, RuleTone};
pub use config::XploreConfig;
pub use controller::{CardRevealCarousel, EngineOptions, ExpiryPolicy, DEFAULT_REVEAL_DELAY};
pub use effects::{open_registration, play_cue, AudioCue, LinkOpener, SilentCue};
pub use error::{CatalogError, ConfigError, EffectError, XploreError, XploreResult};
pub use hero::{HeroMedia, HERO_FALLBACK_DELAY};
pub use interaction::{Activation, InteractionState, RenderState};
pub use reveal::{CardFace, RevealState};
pub use timer::ExpiryTimer;
