//! Document loading for the CLI.
//!
//! Input files are markdown-ish text produced by PDF or LaTeX conversion.
//! Loading applies a size guard before reading and Unicode NFC normalization
//! after: conversion tools frequently emit decomposed accent forms.

use std::fs;
use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use crate::config::MAX_INPUT_BYTES;
use crate::error::{Result, SplitterError};

/// Load a converted document from disk with the default size cap.
///
/// # Arguments
/// * `path` - Path to the document file
///
/// # Returns
/// The NFC-normalized document text
pub fn load_document(path: &Path) -> Result<String> {
    load_document_with_limit(path, MAX_INPUT_BYTES)
}

/// Load a converted document from disk, rejecting files over `limit` bytes.
///
/// The size is checked against file metadata before any content is read.
pub fn load_document_with_limit(path: &Path, limit: u64) -> Result<String> {
    let size = fs::metadata(path)?.len();
    if size > limit {
        return Err(SplitterError::InputTooLarge {
            path: path.to_path_buf(),
            size,
            limit,
        });
    }

    let text = fs::read_to_string(path)?;
    Ok(text.nfc().collect())
}
