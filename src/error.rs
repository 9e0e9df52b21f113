//! Error types for document ingestion, configuration and rule compilation.
//!
//! The analysis passes themselves never fail; these errors only arise at the
//! edges where text, files or user-supplied patterns enter the crate.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("insufficient text content: {actual} chars, need at least {min}")]
    InsufficientText { min: usize, actual: usize },

    #[error("invalid pattern for rule '{name}': {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("fallacy rule with pattern '{pattern}' needs a name")]
    UnnamedRule { pattern: String },

    #[error("failed to load config from {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
