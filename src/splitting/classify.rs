//! Line classification predicates for the scanner.
//!
//! Two independent pure predicates over a trimmed line: is it a statement
//! header, and is it a proof marker. Everything else is body text.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::KIND_KEYWORDS;
use crate::types::StatementKind;

/// Header pattern: optional heading hashes (1-6) or a bold/emphasis marker,
/// then a statement keyword, whitespace, and a label of digits and dots.
///
/// Anchored to the start of the trimmed line. Trailing annotation text, such
/// as a parenthetical name, is tolerated and stays in the title.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let kinds = KIND_KEYWORDS.join("|");
    Regex::new(&format!(
        r"(?i)^(?:#{{1,6}}\s*|\*\*|__)?({kinds})\s+([\d.]+)"
    ))
    .expect("valid regex")
});

/// Proof marker pattern: optional heading hashes (1-6) or emphasis marker,
/// then the keyword "Proof".
///
/// The `__` alternative is tried before `_`, so `__Proof__` matches via its
/// leading double underscore. Trailing markers are never inspected.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PROOF_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:#{1,6}\s*|\*\*|__|_)?Proof").expect("valid regex"));

/// A successful header classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch {
    /// Statement kind from the matched keyword.
    pub kind: StatementKind,

    /// Numeric label exactly as matched (digits and dots).
    pub label: String,
}

impl HeaderMatch {
    /// Derive the record identifier, e.g. "theorem_3.1".
    #[must_use]
    pub fn identifier(&self) -> String {
        format!("{}_{}", self.kind.as_str(), self.label)
    }
}

/// Classify a trimmed line as a statement header.
///
/// Returns the matched kind and numeric label, or `None` when the line is
/// not a header. A keyword without a numeric label (e.g. "Theorem A") does
/// not match.
#[must_use]
pub fn classify_header(line: &str) -> Option<HeaderMatch> {
    let caps = HEADER_PATTERN.captures(line)?;
    let kind = StatementKind::from_keyword(caps.get(1)?.as_str())?;
    let label = caps.get(2)?.as_str().to_string();
    Some(HeaderMatch { kind, label })
}

/// Check whether a trimmed line marks the start of a proof.
#[must_use]
pub fn is_proof_marker(line: &str) -> bool {
    PROOF_PATTERN.is_match(line)
}

/// Build the stored title from a trimmed header line.
///
/// Removes every `#` and `*` (anywhere on the line, not only leading runs),
/// then trims. Underscore markers are kept.
#[must_use]
pub fn header_title(line: &str) -> String {
    line.replace('#', "").replace('*', "").trim().to_string()
}
