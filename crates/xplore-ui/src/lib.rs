//! Xplore'25 UI Components
//!
//! Dioxus components in a blocky sandbox-game style. Every component takes a
//! [`Biome`] that picks its palette; the palette is applied through CSS custom
//! properties (`--mc-light`, `--mc-base`, ...) so one stylesheet serves all
//! seven biomes.
//!
//! ## Biomes
//!
//! - **Nether**: reds
//! - **Cherry**: pinks
//! - **Grassland**: greens (default)
//! - **Desert**: yellows
//! - **Ice**: blues
//! - **Barren**: greys
//! - **Caves**: stone

pub mod components;
pub mod theme;

pub use components::*;
pub use theme::{Biome, BiomePalette};
