//! # annonce
//!
//! Weak-labeling engine for bilingual (French/English) real-estate listing
//! titles. Given a free-text title and optional structured attributes
//! (bedroom count, bathroom count, area, price, location), it emits a set
//! of non-overlapping labeled character spans over ten categories, ready to
//! be written as line-oriented training data for an NER model.
//!
//! # How a title gets labeled
//!
//! ```text
//! Input: "4 Bedrooms Apartment for SALE in Dhaka"   attrs: { price: 45000 }
//!
//!         │
//!         ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │ CANDIDATE GENERATION (three independent sources, pooled in order) │
//! │                                                                   │
//! │  1. field locator   — literal occurrences of attribute values     │
//! │  2. keyword matcher — bilingual fixed vocabulary, boundary-aware  │
//! │  3. pattern matcher — regex families (AREA, PRICE, rooms, GARAGE) │
//! │                                                                   │
//! │  "4 bedrooms apartment for sale in dhaka"                         │
//! │   └──BEDS───┘└──TYPE──┘    └TRANSACTION┘                          │
//! │  Candidates may overlap or duplicate freely.                      │
//! └───────────────────────────────────────────────────────────────────┘
//!         │
//!         ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │ CONFLICT RESOLUTION (greedy, longest span first)                  │
//! │                                                                   │
//! │  Longer spans always beat shorter overlapping ones; among equal   │
//! │  lengths the earlier-pooled source wins. Output is disjoint and   │
//! │  sorted by start offset.                                          │
//! └───────────────────────────────────────────────────────────────────┘
//!         │
//!         ▼
//! Record { text: original title, labels: [[0,10,"BEDS"], ...] }
//! ```
//!
//! Matching runs on a lowercased copy of the title whose code-point count
//! equals the original's, so every span indexes the original text directly.
//!
//! # Example
//!
//! ```rust
//! use annonce::{Annotator, ListingAttributes};
//!
//! let annotator = Annotator::new();
//! let record = annotator.annotate("VENDRE", &ListingAttributes::default());
//! assert_eq!(record.labels.len(), 1);
//! assert_eq!((record.labels[0].start, record.labels[0].end), (0, 6));
//! ```
//!
//! Core types ([`Label`], [`Span`], [`Record`]) live in `annonce-core` and
//! are re-exported here.

#![warn(missing_docs)]

pub mod annotator;
pub mod attrs;
pub mod error;
pub mod export;
pub mod ingest;
pub mod lexicon;
pub mod offset;
pub mod resolve;
pub mod seed;
pub mod sources;

pub use annotator::Annotator;
pub use attrs::ListingAttributes;
pub use error::{Error, Result};
pub use offset::{fold_lowercase, slice_chars, SpanConverter};

// Re-export annonce-core types for convenience.
pub use annonce_core::{Label, ParseLabelError, Record, Span, ValidationIssue};
