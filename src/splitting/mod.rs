//! Statement splitting for converted mathematical documents.
//!
//! This module implements the single-pass line scan that recognizes
//! statement headers and proof markers and routes every other line into the
//! statement or proof body of the currently open record.

mod classify;
mod engine;
mod state;

pub use classify::{classify_header, header_title, is_proof_marker, HeaderMatch};
pub use engine::{split_document, SplitEngine};
