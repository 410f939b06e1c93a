//! # annonce-core
//!
//! Core data types for the `annonce` weak-labeling toolkit: the closed
//! [`Label`] vocabulary, character-offset [`Span`]s, and the [`Record`]
//! shape persisted to line-oriented training files.
//!
//! Everything here is plain data. Matching, conflict resolution, and I/O
//! live in the `annonce` crate; this crate only defines what a labeled
//! title looks like and how to check it for consistency.

#![warn(missing_docs)]

pub mod error;
pub mod label;
pub mod span;

pub use error::ParseLabelError;
pub use label::Label;
pub use span::{Record, Span, ValidationIssue};
