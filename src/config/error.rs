//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document was present but empty (`null`), or no config was given
    #[error("No configuration supplied")]
    Missing,

    /// The document is not valid configuration JSON
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}
