//! Site-wide stylesheet. Component palettes come from `xplore_ui::theme`.

mod styles;

pub use styles::GLOBAL_STYLES;
