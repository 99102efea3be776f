//! Configuration constants for the splitter.

/// Statement keywords recognized at the start of a header line.
///
/// Matching is case-insensitive. The list is compiled into the header
/// pattern; it is not runtime-configurable.
pub const KIND_KEYWORDS: [&str; 5] = [
    "Theorem",
    "Lemma",
    "Proposition",
    "Corollary",
    "Definition",
];

/// Default maximum input document size in bytes (10 MB).
///
/// Converted papers are rarely larger than a few hundred kilobytes; the cap
/// prevents reading an unexpectedly large file into memory.
pub const MAX_INPUT_BYTES: u64 = 10 * 1024 * 1024;

/// Text wrap width for YAML output.
pub const TEXT_WRAP_WIDTH: usize = 100;
