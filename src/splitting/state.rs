//! Scan state for the line scanner.

use crate::types::StatementRecord;

use super::classify::HeaderMatch;

/// Destination body for a content line within the open record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum BodyTarget {
    /// Statement text, before any proof marker.
    Statement,

    /// Proof text, after a proof marker.
    Proof,
}

/// The record currently being accumulated.
///
/// At most one exists at any scan position; it is consumed by
/// [`OpenRecord::finalize`] when the next header or end of input is reached.
#[derive(Debug)]
pub(super) struct OpenRecord {
    header: HeaderMatch,
    title: String,
    statement: String,
    proof: String,
}

impl OpenRecord {
    /// Open a record from a matched header line.
    pub(super) fn open(header: HeaderMatch, title: String) -> Self {
        Self {
            header,
            title,
            statement: String::new(),
            proof: String::new(),
        }
    }

    /// Append the original, untrimmed line to the active body.
    pub(super) fn push_line(&mut self, line: &str, target: BodyTarget) {
        let body = match target {
            BodyTarget::Statement => &mut self.statement,
            BodyTarget::Proof => &mut self.proof,
        };
        body.push_str(line);
        body.push('\n');
    }

    /// Trim both bodies and emit the finished record.
    pub(super) fn finalize(self) -> StatementRecord {
        StatementRecord {
            identifier: self.header.identifier(),
            kind: self.header.kind,
            title: self.title,
            statement: self.statement.trim().to_string(),
            proof: self.proof.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StatementKind;
    use pretty_assertions::assert_eq;

    fn open_theorem() -> OpenRecord {
        OpenRecord::open(
            HeaderMatch {
                kind: StatementKind::Theorem,
                label: "3.1".to_string(),
            },
            "Theorem 3.1".to_string(),
        )
    }

    #[test]
    fn test_finalize_empty_bodies() {
        let record = open_theorem().finalize();
        assert_eq!(record.identifier, "theorem_3.1");
        assert_eq!(record.kind, StatementKind::Theorem);
        assert_eq!(record.title, "Theorem 3.1");
        assert_eq!(record.statement, "");
        assert_eq!(record.proof, "");
    }

    #[test]
    fn test_push_line_routes_by_target() {
        let mut open = open_theorem();
        open.push_line("Let f be smooth.", BodyTarget::Statement);
        open.push_line("By Taylor expansion.", BodyTarget::Proof);
        open.push_line("Q.E.D.", BodyTarget::Proof);

        let record = open.finalize();
        assert_eq!(record.statement, "Let f be smooth.");
        assert_eq!(record.proof, "By Taylor expansion.\nQ.E.D.");
    }

    #[test]
    fn test_push_line_keeps_interior_indentation() {
        let mut open = open_theorem();
        open.push_line("  indented equation", BodyTarget::Statement);
        open.push_line("closing line", BodyTarget::Statement);

        let record = open.finalize();
        // Leading whitespace of the first line is trimmed by finalization,
        // interior line starts are untouched.
        assert_eq!(record.statement, "indented equation\nclosing line");
    }
}
