//! Candidate span sources.
//!
//! Three independent heuristics propose labeled spans over one folded
//! title; none of them deduplicates or arbitrates. The annotator pools
//! their output in a fixed order — fields, then keywords, then the rooms
//! family, then AREA, PRICE, GARAGE patterns — and that pooling order is
//! the tie-break the resolver applies between equal-length candidates
//! (see [`crate::resolve`]).
//!
//! Each source is a pure function of the folded title, the shared offset
//! converter, and the immutable tables; the three may run in any order or
//! concurrently before the resolver joins on the pooled vector.

pub mod fields;
pub mod keywords;
pub mod patterns;
