//! Error types for the wpiece tokenizer library.
//!
//! Training and encoding never fail; errors only come from the boundaries
//! (vocabulary files, record files, configuration).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tokenizer library.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// Error loading a vocabulary or record file
    #[error("Load error: {0}")]
    Load(String),

    /// Error saving a vocabulary or record file
    #[error("Save error: {0}")]
    Save(String),

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A vocabulary file listed the same token twice
    #[error("Duplicate token {token:?} at line {line}")]
    DuplicateToken { token: String, line: usize },
}

impl TokenizerError {
    /// Wrap an I/O error together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            err,
        }
    }
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
