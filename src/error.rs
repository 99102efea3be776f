//! Error types for the splitter.
//!
//! Splitting itself is total over all string inputs and produces no errors;
//! this type covers the file and serialization surfaces around it.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the splitter library.
#[derive(Debug, Error)]
pub enum SplitterError {
    /// Input file exceeds the configured size cap.
    #[error("Input file {} is {size} bytes, exceeding the {limit} byte limit", .path.display())]
    InputTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    /// Unknown output format name.
    #[error("Invalid output format: '{0}'. Expected json or yaml")]
    InvalidFormat(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitterError>;
