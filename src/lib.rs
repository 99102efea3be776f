//! Mathdoc Splitter - Split converted mathematical documents into statement
//! and proof blocks.
//!
//! This crate segments markdown-ish text (typically produced by converting a
//! PDF or LaTeX source) into an ordered sequence of statement records. Each
//! record holds one theorem, lemma, proposition, corollary, or definition,
//! with its proof text separated from the statement text.
//!
//! # Example
//!
//! ```
//! use mathdoc_splitter::split_document;
//!
//! let records = split_document("## Theorem 3.1\nLet f be L-smooth.\n### Proof\nImmediate.\n");
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].identifier, "theorem_3.1");
//! assert_eq!(records[0].proof, "Immediate.");
//! ```
//!
//! # Architecture
//!
//! The splitter is organized into several modules:
//!
//! - [`config`]: Compiled-in constants (statement lexicon, size cap)
//! - [`types`]: Core data types (StatementKind, StatementRecord)
//! - [`error`]: Error types and Result alias
//! - [`splitting`]: Line classification and the single-pass scan
//! - [`observer`]: Record-count notification side channel
//! - [`input`]: Document loading and normalization
//! - [`output`]: JSON and YAML generation
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod observer;
pub mod output;
pub mod splitting;
pub mod types;

// Re-export main functions
pub use splitting::{split_document, SplitEngine};

// Re-export commonly used items
pub use error::{Result, SplitterError};
pub use observer::{SplitObserver, TracingObserver};
pub use types::{StatementKind, StatementRecord};
