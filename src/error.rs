//! Error types for catalog construction, configuration, and serving.

use thiserror::Error;

/// Crate-level error for CLI and server operations.
#[derive(Debug, Error)]
pub enum CanopyError {
    /// Configuration loading or validation failed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Template rendering failed.
    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),

    /// Underlying I/O failure (bind, log file, ...).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization of a catalog surface failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Lookup of a catalog entry by name failed.
    #[error("Unknown tree: {0}")]
    UnknownTree(String),
}

impl From<config::ConfigError> for CanopyError {
    fn from(err: config::ConfigError) -> Self {
        CanopyError::Config(err.to_string())
    }
}
