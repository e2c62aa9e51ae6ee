//! Block-styled components, each tinted by a [`Biome`](crate::theme::Biome)
//!
//! All components share the pixelated look:
//! - Bevelled 4px borders, light on top/left and dark on bottom/right
//! - Monospace bold text
//! - Palette taken from the biome via CSS custom properties

mod background;
mod biome_showcase;
mod bubble;
mod button;
mod card;
mod form;
mod header;
mod image_carousel;
mod inventory;
mod progress_bar;
mod window;
mod world_selector;

pub use background::*;
pub use biome_showcase::*;
pub use bubble::*;
pub use button::*;
pub use card::*;
pub use form::*;
pub use header::*;
pub use image_carousel::*;
pub use inventory::*;
pub use progress_bar::*;
pub use window::*;
pub use world_selector::*;
