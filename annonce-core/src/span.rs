//! Labeled character spans and the record shape written to training files.

use crate::label::Label;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` character range with a category label.
///
/// Offsets are **code-point** offsets into the original, case-preserved
/// title. Matching runs on a length-preserving lowercased copy, so the same
/// offsets index both strings.
///
/// Fields are plain `pub`: a `Span` can represent degenerate data (e.g. a
/// zero-width match surfaced by the field locator's location arm). Use
/// [`Record::issues`] to check a finished annotation, not the constructor.
///
/// # Wire format
///
/// Serializes as the 3-element array `[start, end, "LABEL"]`, matching the
/// line-oriented training files consumed downstream:
///
/// ```rust
/// use annonce_core::{Label, Span};
///
/// let span = Span::new(0, 6, Label::Transaction);
/// let json = serde_json::to_string(&span).unwrap();
/// assert_eq!(json, r#"[0,6,"TRANSACTION"]"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start offset (inclusive, code points).
    pub start: usize,
    /// End offset (exclusive, code points).
    pub end: usize,
    /// Category of this range.
    pub label: Label,
}

impl Span {
    /// Create a span. No validity check; see the type-level docs.
    #[must_use]
    pub const fn new(start: usize, end: usize, label: Label) -> Self {
        Self { start, end, label }
    }

    /// Length in code points (`0` for a degenerate span).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True for zero-width spans.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Overlap test: `max(starts) < min(ends)`.
    ///
    /// Touching boundaries (`self.end == other.start`) do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start.max(other.start) < self.end.min(other.end)
    }
}

impl Serialize for Span {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.start, self.end, self.label).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Span {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (start, end, label) = <(usize, usize, Label)>::deserialize(deserializer)?;
        Ok(Span { start, end, label })
    }
}

/// One labeled title: the unit written to the training file, one per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// The original, case-preserved title text.
    pub text: String,
    /// Final annotation: start-ascending, pairwise disjoint spans.
    pub labels: Vec<Span>,
}

impl Record {
    /// Create a record from a title and its resolved spans.
    #[must_use]
    pub fn new(text: impl Into<String>, labels: Vec<Span>) -> Self {
        Self {
            text: text.into(),
            labels,
        }
    }

    /// Check the annotation invariants: in-bounds, non-degenerate,
    /// pairwise-disjoint spans.
    ///
    /// Returns every violation rather than stopping at the first, so a
    /// `validate` pass over a whole file can report totals.
    #[must_use]
    pub fn issues(&self) -> Vec<ValidationIssue> {
        let char_len = self.text.chars().count();
        let mut issues = Vec::new();

        for (index, span) in self.labels.iter().enumerate() {
            if span.start >= span.end {
                issues.push(ValidationIssue::Degenerate {
                    index,
                    start: span.start,
                    end: span.end,
                });
            }
            if span.end > char_len {
                issues.push(ValidationIssue::OutOfBounds {
                    index,
                    end: span.end,
                    text_len: char_len,
                });
            }
        }

        for i in 0..self.labels.len() {
            for j in (i + 1)..self.labels.len() {
                if self.labels[i].overlaps(&self.labels[j]) {
                    issues.push(ValidationIssue::Overlap { first: i, second: j });
                }
            }
        }

        issues
    }

    /// True when [`Record::issues`] finds nothing.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.issues().is_empty()
    }
}

/// A single invariant violation found in a [`Record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// `start >= end`.
    Degenerate {
        /// Position of the span in `labels`.
        index: usize,
        /// Offending start offset.
        start: usize,
        /// Offending end offset.
        end: usize,
    },
    /// `end` exceeds the title's code-point length.
    OutOfBounds {
        /// Position of the span in `labels`.
        index: usize,
        /// Offending end offset.
        end: usize,
        /// Code-point length of the title.
        text_len: usize,
    },
    /// Two spans cover a common character.
    Overlap {
        /// Position of the earlier span in `labels`.
        first: usize,
        /// Position of the later span in `labels`.
        second: usize,
    },
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationIssue::Degenerate { index, start, end } => {
                write!(f, "span #{index}: degenerate range [{start}, {end})")
            }
            ValidationIssue::OutOfBounds {
                index,
                end,
                text_len,
            } => {
                write!(f, "span #{index}: end {end} exceeds text length {text_len}")
            }
            ValidationIssue::Overlap { first, second } => {
                write!(f, "spans #{first} and #{second} overlap")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_symmetric_and_excludes_touching() {
        let a = Span::new(0, 5, Label::Type);
        let b = Span::new(3, 8, Label::Beds);
        let c = Span::new(5, 9, Label::Price);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c)); // touching at 5
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn zero_width_span_never_overlaps() {
        let wide = Span::new(0, 10, Label::Location);
        let point = Span::new(4, 4, Label::Location);
        assert!(!wide.overlaps(&point));
        assert!(!point.overlaps(&wide));
        assert!(point.is_empty());
        assert_eq!(point.len(), 0);
    }

    #[test]
    fn record_wire_format_matches_training_files() {
        let record = Record::new(
            "VENDRE",
            vec![Span::new(0, 6, Label::Transaction)],
        );
        let line = serde_json::to_string(&record).unwrap();
        assert_eq!(line, r#"{"text":"VENDRE","labels":[[0,6,"TRANSACTION"]]}"#);

        let back: Record = serde_json::from_str(&line).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn issues_reports_all_violations() {
        let record = Record::new(
            "short",
            vec![
                Span::new(0, 4, Label::Type),
                Span::new(2, 9, Label::Beds),
                Span::new(3, 3, Label::Location),
            ],
        );
        let issues = record.issues();
        assert!(issues
            .iter()
            .any(|i| matches!(i, ValidationIssue::Overlap { first: 0, second: 1 })));
        assert!(issues
            .iter()
            .any(|i| matches!(i, ValidationIssue::OutOfBounds { index: 1, .. })));
        assert!(issues
            .iter()
            .any(|i| matches!(i, ValidationIssue::Degenerate { index: 2, .. })));
    }

    #[test]
    fn bounds_count_code_points_not_bytes() {
        // "m²" is 2 chars but 3 bytes; a span ending at 2 is in bounds.
        let record = Record::new("m²", vec![Span::new(0, 2, Label::Area)]);
        assert!(record.is_consistent());
    }
}
