//! Output generation for split documents.
//!
//! JSON is the exact wire form of the records; YAML is a human-readable
//! artifact with presentational text wrapping.

mod text;
mod writer;

pub use text::{normalize_text, should_wrap_text, wrap_text, wrap_text_default};
pub use writer::{generate_json, generate_yaml, save_records, OutputFormat};
