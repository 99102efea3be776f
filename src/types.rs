//! Core data types for the splitter.
//!
//! These types represent the statements extracted from a converted
//! mathematical document, with the proof text separated from the statement
//! text.

use serde::{Deserialize, Serialize};

/// Kinds of mathematical statements recognized in document headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementKind {
    /// Theorem.
    Theorem,

    /// Lemma.
    Lemma,

    /// Proposition.
    Proposition,

    /// Corollary.
    Corollary,

    /// Definition.
    Definition,
}

impl StatementKind {
    /// Get the lower-case string value used in identifiers and output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Theorem => "theorem",
            Self::Lemma => "lemma",
            Self::Proposition => "proposition",
            Self::Corollary => "corollary",
            Self::Definition => "definition",
        }
    }

    /// Parse from a header keyword, case-insensitively.
    #[must_use]
    pub fn from_keyword(text: &str) -> Option<Self> {
        match text.to_lowercase().as_str() {
            "theorem" => Some(Self::Theorem),
            "lemma" => Some(Self::Lemma),
            "proposition" => Some(Self::Proposition),
            "corollary" => Some(Self::Corollary),
            "definition" => Some(Self::Definition),
            _ => None,
        }
    }
}

/// A single statement extracted from a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRecord {
    /// Derived identifier in `<kind>_<label>` form (e.g. "theorem_3.1").
    ///
    /// Identifiers are not deduplicated; a document that repeats a label
    /// produces repeated identifiers, in document order.
    pub identifier: String,

    /// Statement kind from the matched header keyword.
    pub kind: StatementKind,

    /// Header line with heading hashes and bold asterisks removed, trimmed.
    pub title: String,

    /// Statement text between the header and the proof marker (or the next
    /// header), trimmed of surrounding whitespace.
    pub statement: String,

    /// Proof text after the proof marker, trimmed; empty when the statement
    /// had no proof marker.
    pub proof: String,
}

impl StatementRecord {
    /// Whether a proof was captured for this statement.
    #[must_use]
    pub fn has_proof(&self) -> bool {
        !self.proof.is_empty()
    }
}
