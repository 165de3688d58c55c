//! Error types for dotenvguard-core

use std::path::PathBuf;

/// Result type for dotenvguard-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in dotenvguard-core operations
///
/// A missing file is never an error; it parses as an empty mapping.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize validation report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
