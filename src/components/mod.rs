//! Page-level components for Xplore'25.
//!
//! Built from the `xplore_ui` block components and driven by the card-reveal
//! engine in `xplore_core`.

mod coordinators;
mod event_card;
mod event_modal;
mod events_hero;
mod events_slider;
mod nav_header;

pub use coordinators::Coordinators;
pub use event_card::EventCard;
pub use event_modal::EventModal;
pub use events_hero::EventsHero;
pub use events_slider::EventsSlider;
pub use nav_header::{NavHeader, NavLocation};
