//! Fire-and-forget side effects at the edge of the interaction engine.
//!
//! The engine only knows these traits. The desktop app implements them by
//! evaluating script in the webview; tests plug in recorders. Failures are
//! logged and dropped, never retried and never shown to the user.

use std::sync::Arc;

use crate::catalog::{Catalog, ItemId};
use crate::error::EffectError;

/// Plays the short "card flip" sound
pub trait AudioCue: Send + Sync {
    fn play(&self) -> Result<(), EffectError>;
}

/// Opens an external url in a new browsing context
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<(), EffectError>;
}

/// Audio cue that does nothing (headless use, tests)
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentCue;

impl AudioCue for SilentCue {
    fn play(&self) -> Result<(), EffectError> {
        Ok(())
    }
}

impl<T: AudioCue + ?Sized> AudioCue for Arc<T> {
    fn play(&self) -> Result<(), EffectError> {
        (**self).play()
    }
}

impl<T: LinkOpener + ?Sized> LinkOpener for Arc<T> {
    fn open(&self, url: &str) -> Result<(), EffectError> {
        (**self).open(url)
    }
}

/// Play a cue, logging instead of propagating failure
pub fn play_cue(cue: &dyn AudioCue) {
    if let Err(e) = cue.play() {
        tracing::warn!("Audio cue failed: {}", e);
    }
}

/// Open the registration form of an event.
///
/// Returns `true` if the opener accepted the url. Unknown ids, events
/// without a form and opener failures all return `false` after logging.
pub fn open_registration(catalog: &Catalog, opener: &dyn LinkOpener, id: ItemId) -> bool {
    let Some(url) = catalog.registration_url(id) else {
        tracing::debug!(id, "No registration link for event");
        return false;
    };

    match opener.open(url) {
        Ok(()) => {
            tracing::info!(id, url, "Opened registration link");
            true
        }
        Err(e) => {
            tracing::warn!(id, url, "Failed to open registration link: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use super::*;

    #[derive(Default)]
    struct RecordingOpener {
        opened: Mutex<Vec<String>>,
        fail: bool,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) -> Result<(), EffectError> {
            if self.fail {
                return Err(EffectError::Blocked("popup blocker".to_string()));
            }
            self.opened.lock().push(url.to_string());
            Ok(())
        }
    }

    struct BrokenCue;

    impl AudioCue for BrokenCue {
        fn play(&self) -> Result<(), EffectError> {
            Err(EffectError::Unavailable("no audio device".to_string()))
        }
    }

    #[test]
    fn test_open_registration() {
        let catalog = Catalog::xplore25();
        let opener = RecordingOpener::default();

        assert!(open_registration(&catalog, &opener, 1));
        assert_eq!(
            opener.opened.lock().as_slice(),
            ["https://forms.gle/8HK38gcdaHy8Gebs6"]
        );
    }

    #[test]
    fn test_open_registration_unknown_id() {
        let catalog = Catalog::xplore25();
        let opener = RecordingOpener::default();

        assert!(!open_registration(&catalog, &opener, 999));
        assert!(opener.opened.lock().is_empty());
    }

    #[test]
    fn test_opener_failure_is_swallowed() {
        let catalog = Catalog::xplore25();
        let opener = RecordingOpener {
            fail: true,
            ..Default::default()
        };
        assert!(!open_registration(&catalog, &opener, 2));
    }

    #[test]
    fn test_cue_failure_is_swallowed() {
        play_cue(&BrokenCue);
        play_cue(&SilentCue);
    }
}
