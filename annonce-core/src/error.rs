//! Error types for annonce-core.

use thiserror::Error;

/// Returned when parsing a label token that is not one of the ten
/// categories.
///
/// The label set is closed (the downstream trainer is configured with
/// exactly these categories), so an unknown token is always a data error,
/// never an extension point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown label {0:?} (expected one of the ten listing categories)")]
pub struct ParseLabelError(pub String);
