//! Page components for Xplore'25.

mod events;
mod landing;
mod links;
mod showcase;

pub use events::Events;
pub use landing::Landing;
pub use links::Links;
pub use showcase::Showcase;
