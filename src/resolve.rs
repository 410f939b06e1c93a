//! Conflict resolution: turn an overlapping candidate pool into one
//! consistent annotation.
//!
//! # The policy
//!
//! Greedy longest-span-first interval selection:
//!
//! ```text
//! Candidates (pooled):        Resolution:
//!
//!   [  2 salles de bain  ]      accepted  (longest)
//!        [salle]                discarded (overlaps an accepted span)
//!   [villa]                     accepted  (no conflict)
//! ```
//!
//! A longer span is assumed more informative than any shorter span it
//! overlaps — "2 salles de bain" beats a sub-match on "salle" — and a
//! character range denotes exactly one semantic role, so two overlapping
//! spans never both survive, whatever their labels.
//!
//! # Tie-break is pooling order
//!
//! The length sort is **stable** with no secondary key: equal-length
//! candidates keep their relative order from pooling, which the annotator
//! fixes as
//!
//! ```text
//! fields > keywords > rooms family > AREA > PRICE > GARAGE
//! ```
//!
//! The ranking is part of the output contract: changing either the source
//! call order or a table's entry order changes which of two equal-length
//! candidates wins.

use annonce_core::Span;

/// Resolve a candidate pool into a disjoint, start-ordered annotation.
///
/// Never fails: an empty pool yields an empty annotation, and any pool
/// yields a pairwise-disjoint result in O(n²) worst case (candidate counts
/// are bounded by title length and table size, so this stays small).
#[must_use]
pub fn resolve(mut candidates: Vec<Span>) -> Vec<Span> {
    // Stable: equal-length spans keep pooling order.
    candidates.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut accepted: Vec<Span> = Vec::new();
    for candidate in candidates {
        if !accepted.iter().any(|a| candidate.overlaps(a)) {
            accepted.push(candidate);
        }
    }

    accepted.sort_by_key(|span| span.start);
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use annonce_core::Label;

    #[test]
    fn empty_pool_is_fine() {
        assert!(resolve(Vec::new()).is_empty());
    }

    #[test]
    fn longer_span_wins_regardless_of_pool_position() {
        // Shorter candidate pooled first; longer one must still win.
        let resolved = resolve(vec![
            Span::new(2, 7, Label::Amenity),
            Span::new(0, 16, Label::Baths),
        ]);
        assert_eq!(resolved, vec![Span::new(0, 16, Label::Baths)]);
    }

    #[test]
    fn equal_length_tie_goes_to_earlier_pooled() {
        let resolved = resolve(vec![
            Span::new(0, 5, Label::Location), // field-based, pooled first
            Span::new(0, 5, Label::Type),     // keyword, pooled second
        ]);
        assert_eq!(resolved, vec![Span::new(0, 5, Label::Location)]);
    }

    #[test]
    fn discarded_candidates_are_never_reconsidered() {
        // [0,10) wins; [5,12) is discarded; [10,14) then fits even though
        // it overlaps the discarded span.
        let resolved = resolve(vec![
            Span::new(10, 14, Label::Price),
            Span::new(5, 12, Label::Area),
            Span::new(0, 10, Label::Beds),
        ]);
        assert_eq!(
            resolved,
            vec![Span::new(0, 10, Label::Beds), Span::new(10, 14, Label::Price)]
        );
    }

    #[test]
    fn touching_spans_both_survive() {
        let resolved = resolve(vec![
            Span::new(0, 5, Label::Type),
            Span::new(5, 9, Label::Beds),
        ]);
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn duplicates_collapse_to_one() {
        let resolved = resolve(vec![
            Span::new(12, 15, Label::Type),
            Span::new(12, 15, Label::Type),
        ]);
        assert_eq!(resolved, vec![Span::new(12, 15, Label::Type)]);
    }

    #[test]
    fn output_is_start_ordered() {
        let resolved = resolve(vec![
            Span::new(20, 24, Label::Price),
            Span::new(0, 4, Label::Type),
            Span::new(8, 14, Label::Area),
        ]);
        let starts: Vec<usize> = resolved.iter().map(|s| s.start).collect();
        let mut sorted = starts.clone();
        sorted.sort_unstable();
        assert_eq!(starts, sorted);
    }

    #[test]
    fn zero_width_candidates_pass_through() {
        // Zero-width spans overlap nothing (max(starts) < min(ends) cannot
        // hold), so the greedy walk accepts them; see the field locator's
        // place-arm note for where they can come from.
        let resolved = resolve(vec![
            Span::new(0, 4, Label::Type),
            Span::new(2, 2, Label::Location),
        ]);
        assert_eq!(resolved.len(), 2);
    }
}
