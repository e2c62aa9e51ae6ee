//! Error types for Xplore'25

use thiserror::Error;

use crate::catalog::ItemId;

/// Problems found while building or loading an event catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Item ids are 1-based
    #[error("Item id must be at least 1, got {0}")]
    ZeroId(ItemId),

    /// Two items share an id
    #[error("Duplicate item id: {0}")]
    DuplicateId(ItemId),

    /// A detail record points at an item that does not exist
    #[error("Detail record for unknown item: {0}")]
    OrphanDetail(ItemId),

    /// Registration links must be absolute http(s) urls
    #[error("Invalid registration url for item {id}: {url}")]
    InvalidUrl { id: ItemId, url: String },

    /// Malformed catalog JSON
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Catalog file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Problems loading the application configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Malformed configuration JSON
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A value was out of its allowed range
    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Failure of a fire-and-forget side effect (audio cue, link opener).
///
/// These never reach the user; callers log and move on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EffectError {
    /// The platform refused the action (autoplay policy, popup blocker)
    #[error("Blocked by platform: {0}")]
    Blocked(String),

    /// The effect backend is not available in this context
    #[error("Effect backend unavailable: {0}")]
    Unavailable(String),
}

/// Main error type for Xplore'25 operations
#[derive(Error, Debug)]
pub enum XploreError {
    /// Catalog error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Config error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Side-effect error
    #[error(transparent)]
    Effect(#[from] EffectError),
}

/// Result type alias using XploreError
pub type XploreResult<T> = Result<T, XploreError>;
