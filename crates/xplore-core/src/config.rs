//! Application configuration.
//!
//! Every field has a default, so a config file only needs the keys it
//! changes:
//!
//! ```json
//! { "reveal_delay_ms": 8000, "expiry_policy": "from-first-reveal" }
//! ```
//!
//! Command-line flags are applied on top by the binaries.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::controller::{EngineOptions, ExpiryPolicy};
use crate::effects::AudioCue;
use crate::error::{ConfigError, XploreResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XploreConfig {
    /// How long revealed cards stay face up
    pub reveal_delay_ms: u64,
    pub expiry_policy: ExpiryPolicy,
    /// JSON catalog replacing the built-in lineup
    pub catalog: Option<PathBuf>,
    pub flip_sound: String,
    pub background_music: String,
    /// 0.0 ..= 1.0
    pub music_volume: f32,
    /// "Generating World..." overlay on the landing page
    pub intro_delay_ms: u64,
}

impl Default for XploreConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 5000,
            expiry_policy: ExpiryPolicy::FromLatestReveal,
            catalog: None,
            flip_sound: "/assets/flip.mp3".to_string(),
            background_music: "/assets/bgm.mp3".to_string(),
            music_volume: 0.3,
            intro_delay_ms: 2000,
        }
    }
}

impl XploreConfig {
    /// `<config dir>/xplore/config.json`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("xplore")
            .join("config.json")
    }

    /// Parse and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Load `path` if given (errors propagate), else the default location if
    /// it exists, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = Self::default_path();
                if default.exists() {
                    Self::load(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reveal_delay_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "reveal_delay_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.music_volume) {
            return Err(ConfigError::Invalid {
                field: "music_volume",
                reason: format!("{} is outside 0.0..=1.0", self.music_volume),
            });
        }
        Ok(())
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub fn intro_delay(&self) -> Duration {
        Duration::from_millis(self.intro_delay_ms)
    }

    /// The configured catalog file, or the built-in lineup
    pub fn load_catalog(&self) -> XploreResult<Catalog> {
        match &self.catalog {
            Some(path) => Ok(Catalog::load(path)?),
            None => Ok(Catalog::xplore25()),
        }
    }

    pub fn engine_options(&self, audio: Arc<dyn AudioCue>) -> EngineOptions {
        EngineOptions {
            reveal_delay: self.reveal_delay(),
            policy: self.expiry_policy,
            audio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::SilentCue;

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "reveal_delay_ms": 8000, "expiry_policy": "from-first-reveal" }"#,
        )
        .unwrap();

        let config = XploreConfig::load(&path).unwrap();
        assert_eq!(config.reveal_delay(), Duration::from_millis(8000));
        assert_eq!(config.expiry_policy, ExpiryPolicy::FromFirstReveal);
        assert_eq!(config.music_volume, 0.3);
        assert_eq!(config.catalog, None);
    }

    #[test]
    fn test_rejects_zero_delay() {
        let config = XploreConfig {
            reveal_delay_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "reveal_delay_ms", .. })
        ));
    }

    #[test]
    fn test_rejects_loud_music() {
        let config = XploreConfig {
            music_volume: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = XploreConfig::load_or_default(Some(&dir.path().join("missing.json")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_engine_options() {
        let config = XploreConfig::default();
        let options = config.engine_options(Arc::new(SilentCue));
        assert_eq!(options.reveal_delay, Duration::from_millis(5000));
        assert_eq!(options.policy, ExpiryPolicy::FromLatestReveal);
    }

    #[test]
    fn test_catalog_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(
            &path,
            r#"{
                "name": "Mini",
                "items": [
                    {"id": 1, "title": "Solo", "image_ref": "/a.png", "description": "", "category": "Fun"}
                ]
            }"#,
        )
        .unwrap();

        let config = XploreConfig {
            catalog: Some(path),
            ..Default::default()
        };
        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog.name(), "Mini");
        assert_eq!(catalog.len(), 1);
    }
}
