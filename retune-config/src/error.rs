//! Error types for configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while reading or writing a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid document.
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The in-memory document could not be rendered.
    #[error("serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
