//! Text normalization and wrapping utilities for YAML output.

use regex::Regex;
use std::sync::LazyLock;
use textwrap::{fill, Options};

use crate::config::TEXT_WRAP_WIDTH;

/// Regex pattern for missing space after comma before a word character.
/// Matches "word,word" but not "word, word" or "1,000".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MISSING_SPACE_AFTER_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z]),([a-zA-Z])").expect("valid regex"));

/// Check if a paragraph carries TeX math (`$...$` or `$$...$$`).
///
/// Math-bearing paragraphs are never rewrapped: line breaks inside display
/// math change what downstream TeX renderers see.
fn contains_math(paragraph: &str) -> bool {
    paragraph.contains('$')
}

/// Normalize common typographical issues in converted text.
///
/// Fixes missing space after a comma between words (e.g. "smooth,convex" →
/// "smooth, convex"), an artifact PDF extraction regularly produces.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    // Loop until no more replacements needed (handles overlapping cases like "a,b,c")
    let mut result = text.to_string();
    loop {
        let replaced = MISSING_SPACE_AFTER_COMMA
            .replace_all(&result, "$1, $2")
            .to_string();
        if replaced == result {
            break;
        }
        result = replaced;
    }
    result
}

/// Wrap text at the specified width, preserving paragraph breaks.
///
/// Paragraphs containing math are passed through unchanged.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> String {
    let options = Options::new(width);

    text.split("\n\n")
        .map(|paragraph| {
            if contains_math(paragraph) {
                paragraph.to_string()
            } else {
                fill(paragraph, &options)
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Check if text should be wrapped for readability.
#[must_use]
pub fn should_wrap_text(text: &str) -> bool {
    text.lines().any(|line| line.len() > TEXT_WRAP_WIDTH)
}

/// Wrap text with the default width.
#[must_use]
pub fn wrap_text_default(text: &str) -> String {
    wrap_text(text, TEXT_WRAP_WIDTH)
}
