//! Events-page hero video state.
//!
//! The hero plays an intro clip over a poster image. The poster stays
//! visible until the clip is ready, comes back if it fails or ends, and a
//! fallback timer forces the clip visible when the media events never fire.

use std::time::Duration;

/// How long to wait for media events before showing the clip anyway
pub const HERO_FALLBACK_DELAY: Duration = Duration::from_millis(2000);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeroMedia {
    loaded: bool,
    failed: bool,
    ended: bool,
}

impl HeroMedia {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_loaded(&mut self) {
        self.loaded = true;
    }

    pub fn on_can_play(&mut self) {
        self.loaded = true;
    }

    pub fn on_error(&mut self) {
        tracing::warn!("Hero video failed to load, keeping poster");
        self.failed = true;
    }

    pub fn on_ended(&mut self) {
        self.ended = true;
    }

    /// Fallback timer fired
    pub fn on_fallback_timeout(&mut self) {
        if !self.loaded && !self.failed {
            self.loaded = true;
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }

    pub fn has_ended(&self) -> bool {
        self.ended
    }

    /// Whether the poster covers the video
    pub fn show_poster(&self) -> bool {
        !(self.loaded && !self.failed && !self.ended)
    }

    pub fn headline(&self) -> &'static str {
        if self.ended {
            "Upcoming Events"
        } else {
            "Xplore'25"
        }
    }

    pub fn tagline(&self) -> &'static str {
        if self.ended {
            "Discover exciting events, workshops, and competitions organized by the Department of CSE"
        } else {
            "Department of CSE"
        }
    }
}
