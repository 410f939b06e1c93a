//! The annotator: per-record orchestration of the candidate sources and
//! the conflict resolver.

use crate::attrs::ListingAttributes;
use crate::offset::{fold_lowercase, SpanConverter};
use crate::resolve::resolve;
use crate::sources;
use annonce_core::{Record, Span};

/// Weak-labeling annotator for listing titles.
///
/// Stateless apart from the process-wide immutable tables, so one instance
/// can be shared freely across threads; each call is a pure function of
/// its inputs. Records have no ordering dependency on each other — a
/// caller that wants parallel batches can split the input however it
/// likes.
///
/// # Example
///
/// ```rust
/// use annonce::{Annotator, Label, ListingAttributes};
///
/// let annotator = Annotator::new();
/// let attrs = ListingAttributes::default().with_city("Dhaka");
/// let record = annotator.annotate("RENT a flat in Dhaka", &attrs);
///
/// let labels: Vec<Label> = record.labels.iter().map(|s| s.label).collect();
/// assert_eq!(labels, vec![Label::Transaction, Label::Type, Label::Location]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Annotator;

impl Annotator {
    /// Create an annotator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Annotate one title, producing its final disjoint span list paired
    /// with the original (case-preserved) text.
    ///
    /// Cannot fail: degenerate input, including the empty title, yields an
    /// empty annotation.
    #[must_use]
    pub fn annotate(&self, title: &str, attrs: &ListingAttributes) -> Record {
        let folded = fold_lowercase(title);
        let converter = SpanConverter::new(&folded);

        // Pooling order is the tie-break contract (see crate::resolve):
        // fields, keywords, then the pattern families.
        let mut pool: Vec<Span> = Vec::new();
        sources::fields::candidates(&folded, &converter, attrs, &mut pool);
        sources::keywords::candidates(&folded, &converter, &mut pool);
        sources::patterns::candidates(&folded, &converter, &mut pool);

        Record::new(title, resolve(pool))
    }

    /// Annotate a batch of `(title, attributes)` rows, one record each.
    ///
    /// Rows are independent; this is a plain map kept serial so callers
    /// control their own parallelism.
    #[must_use]
    pub fn annotate_batch<'a, I>(&self, rows: I) -> Vec<Record>
    where
        I: IntoIterator<Item = (&'a str, &'a ListingAttributes)>,
    {
        rows.into_iter()
            .map(|(title, attrs)| self.annotate(title, attrs))
            .collect()
    }
}
