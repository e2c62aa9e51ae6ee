//! Webview side effects.
//!
//! Sound and link opening run as script in the desktop webview. Playback and
//! popups can be refused by the webview; the refusal arrives asynchronously
//! and is only logged.

use dioxus::prelude::*;
use xplore_core::{AudioCue, EffectError, LinkOpener};

/// Run `js` in the webview; the script returns `null` on success or an error
/// string, which is logged at warn.
fn run_script(what: &'static str, js: String) -> Result<(), EffectError> {
    if current_scope_id().is_err() {
        return Err(EffectError::Unavailable(format!("{}: no webview runtime", what)));
    }

    let eval = document::eval(&js);
    spawn(async move {
        match eval.join::<Option<String>>().await {
            Ok(None) => tracing::trace!("{} done", what),
            Ok(Some(reason)) => tracing::warn!("{} blocked: {}", what, reason),
            Err(e) => tracing::warn!("{} failed: {:?}", what, e),
        }
    });
    Ok(())
}

/// Quote a string as a JavaScript literal
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Plays a short sound through an `Audio` element
#[derive(Clone, Debug)]
pub struct WebviewCue {
    src: String,
    volume: f32,
}

impl WebviewCue {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            volume: 1.0,
        }
    }

    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume.clamp(0.0, 1.0);
        self
    }

    fn script(&self) -> String {
        format!(
            "try {{ const a = new Audio({}); a.volume = {}; await a.play(); return null; }} catch (e) {{ return String(e); }}",
            js_string(&self.src),
            self.volume
        )
    }
}

impl AudioCue for WebviewCue {
    fn play(&self) -> Result<(), EffectError> {
        run_script("Audio cue", self.script())
    }
}

/// Opens urls with `window.open` in a new context
#[derive(Clone, Copy, Debug, Default)]
pub struct WebviewLinkOpener;

impl WebviewLinkOpener {
    fn script(url: &str) -> String {
        format!(
            "try {{ window.open({}, '_blank', 'noopener,noreferrer'); return null; }} catch (e) {{ return String(e); }}",
            js_string(url)
        )
    }
}

impl LinkOpener for WebviewLinkOpener {
    fn open(&self, url: &str) -> Result<(), EffectError> {
        run_script("Open link", Self::script(url))
    }
}

/// Looping background track; started by the landing page
#[derive(Clone, Debug)]
pub struct BackgroundMusic {
    src: String,
    volume: f32,
}

impl BackgroundMusic {
    pub fn new(src: impl Into<String>, volume: f32) -> Self {
        Self {
            src: src.into(),
            volume: volume.clamp(0.0, 1.0),
        }
    }

    fn script(&self) -> String {
        format!(
            "try {{ \
                if (!window.__xploreBgm) {{ window.__xploreBgm = new Audio({}); window.__xploreBgm.loop = true; }} \
                window.__xploreBgm.volume = {}; \
                await window.__xploreBgm.play(); return null; \
            }} catch (e) {{ return String(e); }}",
            js_string(&self.src),
            self.volume
        )
    }

    /// Start playback. Autoplay refusal is logged, not retried.
    pub fn start(&self) {
        if let Err(e) = run_script("Background music", self.script()) {
            tracing::warn!("Background music unavailable: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_quoted() {
        let js = WebviewLinkOpener::script("https://forms.gle/a\"b");
        assert!(js.contains(r#"window.open("https://forms.gle/a\"b", '_blank'"#));
    }

    #[test]
    fn cue_sets_volume() {
        let js = WebviewCue::new("/assets/flip.mp3").with_volume(3.0).script();
        assert!(js.contains(r#"new Audio("/assets/flip.mp3")"#));
        assert!(js.contains("a.volume = 1;"));
    }

    #[test]
    fn music_loops_at_volume() {
        let js = BackgroundMusic::new("/assets/bgm.mp3", 0.3).script();
        assert!(js.contains("loop = true"));
        assert!(js.contains("volume = 0.3;"));
    }

    #[test]
    fn outside_runtime_is_unavailable() {
        let err = WebviewLinkOpener.open("https://example.com").unwrap_err();
        assert!(matches!(err, EffectError::Unavailable(_)));
    }
}
