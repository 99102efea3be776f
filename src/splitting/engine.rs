//! Split engine implementing the single-pass line scan.

use crate::observer::SplitObserver;
use crate::types::StatementRecord;

use super::classify::{classify_header, header_title, is_proof_marker};
use super::state::{BodyTarget, OpenRecord};

/// Engine for splitting a document into statement records.
///
/// Holds an optional observer that is notified with the record count of each
/// invocation; results are identical with or without one.
pub struct SplitEngine {
    observer: Option<Box<dyn SplitObserver>>,
}

impl SplitEngine {
    /// Create a new engine without an observer.
    #[must_use]
    pub fn new() -> Self {
        Self { observer: None }
    }

    /// Attach an observer notified after each split.
    #[must_use]
    pub fn with_observer(mut self, observer: Box<dyn SplitObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Split a document into statement records, in document order.
    ///
    /// Total over all inputs: text without headers yields an empty vector, a
    /// statement without a proof marker yields a record with an empty proof,
    /// and text before the first header is discarded.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<StatementRecord> {
        let mut records: Vec<StatementRecord> = Vec::new();
        let mut open: Option<OpenRecord> = None;
        let mut target = BodyTarget::Statement;

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue; // blank lines feed neither body
            }

            // A. A new header closes the previous record and opens the next.
            if let Some(header) = classify_header(trimmed) {
                if let Some(record) = open.take() {
                    records.push(record.finalize());
                }
                open = Some(OpenRecord::open(header, header_title(trimmed)));
                target = BodyTarget::Statement;
                continue;
            }

            // B. A proof marker switches the accumulator. Only meaningful
            // inside a record; before the first header it is ordinary
            // discarded preamble.
            if open.is_some() && is_proof_marker(trimmed) {
                target = BodyTarget::Proof;
                continue;
            }

            // C. Content line: the original, untrimmed text goes to the
            // active body. Lines before the first header fall through here
            // with no open record and are discarded.
            if let Some(record) = open.as_mut() {
                record.push_line(line, target);
            }
        }

        if let Some(record) = open.take() {
            records.push(record.finalize());
        }

        if let Some(observer) = self.observer.as_deref() {
            observer.on_document_split(records.len());
        }

        records
    }
}

impl Default for SplitEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a document with a default engine and no observer.
#[must_use]
pub fn split_document(text: &str) -> Vec<StatementRecord> {
    SplitEngine::new().split(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StatementKind;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_split_empty_input() {
        assert_eq!(split_document(""), Vec::new());
    }

    #[test]
    fn test_split_no_headers() {
        let text = "# Introduction\nThis paper discusses optimization.\n\nSome more prose.\n";
        assert_eq!(split_document(text), Vec::new());
    }

    #[test]
    fn test_split_single_theorem_with_proof() {
        let text = "\
## Theorem 3.1
Let $f$ be an L-smooth function.

### Proof
Using the Taylor expansion.
Q.E.D.
";
        let records = split_document(text);
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.identifier, "theorem_3.1");
        assert_eq!(record.kind, StatementKind::Theorem);
        assert_eq!(record.title, "Theorem 3.1");
        assert_eq!(record.statement, "Let $f$ be an L-smooth function.");
        assert_eq!(record.proof, "Using the Taylor expansion.\nQ.E.D.");
    }

    #[test]
    fn test_split_statement_and_proof_are_disjoint() {
        let text = "\
## Theorem 3.1
Statement line.
### Proof
Proof line.
";
        let records = split_document(text);
        assert_eq!(records.len(), 1);
        assert!(!records[0].statement.contains("Proof line."));
        assert!(!records[0].proof.contains("Statement line."));
    }

    #[test]
    fn test_split_back_to_back_headers() {
        let text = "\
## Theorem 1.1
First statement.
## Theorem 1.2
Second statement.
### Proof
Second proof.
";
        let records = split_document(text);
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].identifier, "theorem_1.1");
        assert_eq!(records[0].statement, "First statement.");
        assert_eq!(records[0].proof, "");

        assert_eq!(records[1].identifier, "theorem_1.2");
        assert_eq!(records[1].proof, "Second proof.");
    }

    #[test]
    fn test_split_discards_preamble() {
        let text = "\
# Introduction
This paper discusses advanced optimization.

## Theorem 3.1
The statement.
";
        let records = split_document(text);
        assert_eq!(records.len(), 1);
        assert!(!records[0].statement.contains("advanced optimization"));
        assert!(!records[0].title.contains("Introduction"));
    }

    #[test]
    fn test_split_proof_marker_in_preamble_is_discarded() {
        let text = "\
Proof techniques are surveyed below.

## Lemma 2.1
The statement.
";
        let records = split_document(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].statement, "The statement.");
        assert_eq!(records[0].proof, "");
    }

    #[test]
    fn test_split_bold_header_style() {
        let text = "\
**Lemma 3.2**
The sequence remains in a compact set.

**Proof**
This follows from coercivity.
";
        let records = split_document(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].identifier, "lemma_3.2");
        assert_eq!(records[0].kind, StatementKind::Lemma);
        assert_eq!(records[0].title, "Lemma 3.2");
        assert_eq!(records[0].proof, "This follows from coercivity.");
    }

    #[test]
    fn test_split_preserves_document_order() {
        let text = "\
## Lemma 9.9
l
## Theorem 1.1
t
## Definition 5.5
d
";
        let records = split_document(text);
        let identifiers: Vec<&str> = records.iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(identifiers, vec!["lemma_9.9", "theorem_1.1", "definition_5.5"]);
    }

    #[test]
    fn test_split_record_count_equals_header_count() {
        let text = "\
## Theorem 1
a
## Lemma 2
b
### Proof
c
## Corollary 3
d
Not a Header 4
";
        assert_eq!(split_document(text).len(), 3);
    }

    #[test]
    fn test_split_blank_lines_dropped_from_bodies() {
        let text = "\
## Theorem 1


First line.


Second line.

### Proof

Proof line.

";
        let records = split_document(text);
        assert_eq!(records[0].statement, "First line.\nSecond line.");
        assert_eq!(records[0].proof, "Proof line.");
    }

    #[test]
    fn test_split_insensitive_to_extra_blank_lines() {
        let compact = "## Theorem 1\nStatement.\n### Proof\nProof line.\n## Lemma 2\nSecond.\n";
        let spaced = "\n\n## Theorem 1\n\n\nStatement.\n\n### Proof\n\nProof line.\n\n\n## Lemma 2\n\nSecond.\n\n";
        assert_eq!(split_document(compact), split_document(spaced));
    }

    #[test]
    fn test_split_repeated_proof_marker_is_idempotent() {
        let text = "\
## Theorem 1
Statement.
### Proof
First part.
**Proof (cont.)**
Second part.
";
        let records = split_document(text);
        assert_eq!(records.len(), 1);
        // The restated marker line is consumed, not stored
        assert_eq!(records[0].proof, "First part.\nSecond part.");
        assert!(!records[0].proof.contains("cont."));
    }

    #[test]
    fn test_split_header_takes_precedence_over_proof_marker() {
        // A header mentioning "Proof" later in the line is still a header
        let text = "\
## Theorem 1
Statement.
## Theorem 2 Proof sketch included
Second statement.
";
        let records = split_document(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].identifier, "theorem_2");
        assert_eq!(records[1].statement, "Second statement.");
    }

    #[test]
    fn test_split_duplicate_labels_not_deduplicated() {
        let text = "\
## Theorem 3.1
First.
## Theorem 3.1
Second.
";
        let records = split_document(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].identifier, "theorem_3.1");
        assert_eq!(records[1].identifier, "theorem_3.1");
        assert_eq!(records[0].statement, "First.");
        assert_eq!(records[1].statement, "Second.");
    }

    #[test]
    fn test_split_unterminated_proof_runs_to_end_of_input() {
        let text = "\
## Theorem 1
Statement.
### Proof
Line one.
Line two.";
        let records = split_document(text);
        assert_eq!(records[0].proof, "Line one.\nLine two.");
    }

    #[test]
    fn test_split_keeps_untrimmed_body_lines() {
        let text = "## Theorem 1\nfirst\n    $$ x = y $$\nlast\n";
        let records = split_document(text);
        assert_eq!(records[0].statement, "first\n    $$ x = y $$\nlast");
    }

    #[test]
    fn test_split_indented_header_recognized() {
        let text = "   ## Theorem 7.3\nStatement.\n";
        let records = split_document(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].identifier, "theorem_7.3");
    }

    #[test]
    fn test_split_malformed_label_is_body_text() {
        let text = "\
## Theorem 1
Statement.
Theorem A is unrelated prose.
";
        let records = split_document(text);
        assert_eq!(records.len(), 1);
        assert!(records[0].statement.contains("Theorem A is unrelated prose."));
    }

    struct RecordingObserver(Rc<Cell<Option<usize>>>);

    impl SplitObserver for RecordingObserver {
        fn on_document_split(&self, record_count: usize) {
            self.0.set(Some(record_count));
        }
    }

    #[test]
    fn test_observer_receives_record_count() {
        let seen = Rc::new(Cell::new(None));
        let engine = SplitEngine::new().with_observer(Box::new(RecordingObserver(Rc::clone(&seen))));

        let records = engine.split("## Theorem 1\na\n## Lemma 2\nb\n");
        assert_eq!(records.len(), 2);
        assert_eq!(seen.get(), Some(2));
    }

    #[test]
    fn test_observer_notified_on_empty_result() {
        let seen = Rc::new(Cell::new(None));
        let engine = SplitEngine::new().with_observer(Box::new(RecordingObserver(Rc::clone(&seen))));

        assert!(engine.split("no headers here").is_empty());
        assert_eq!(seen.get(), Some(0));
    }

    #[test]
    fn test_observer_absence_changes_nothing() {
        let text = "## Theorem 1\na\n### Proof\nb\n";
        let seen = Rc::new(Cell::new(None));
        let with = SplitEngine::new()
            .with_observer(Box::new(RecordingObserver(Rc::clone(&seen))))
            .split(text);
        let without = SplitEngine::new().split(text);
        assert_eq!(with, without);
    }
}
