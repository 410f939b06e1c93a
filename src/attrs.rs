//! Structured listing attributes.
//!
//! The tabular side of a listing row: values the feed already knows
//! (bedroom count, price, city) that the field locator tries to find
//! verbatim inside the free-text title. Read-only to the engine.

use serde::{Deserialize, Serialize};

/// Optional per-record attribute values, as strings.
///
/// `None` means "do not attempt field-based matching for this attribute on
/// this record". The ingest boundary stringifies and trims cell text;
/// the engine lowercases before matching, so callers need not normalize
/// case.
///
/// Two place-valued fields exist because listing feeds carry both a coarse
/// `City` and a finer `Location` column; both map to the LOCATION category.
///
/// # Example
///
/// ```rust
/// use annonce::ListingAttributes;
///
/// let attrs = ListingAttributes::default()
///     .with_beds("4")
///     .with_city("Dhaka");
/// assert!(attrs.baths.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingAttributes {
    /// Bedroom count, matched as BEDS.
    pub beds: Option<String>,
    /// Bathroom count, matched as BATHS.
    pub baths: Option<String>,
    /// Surface area, matched as AREA.
    pub area: Option<String>,
    /// Coarse place name, matched as LOCATION.
    pub city: Option<String>,
    /// Fine place name, matched as LOCATION.
    pub location: Option<String>,
    /// Asking price, matched as PRICE.
    pub price: Option<String>,
}

impl ListingAttributes {
    /// Set the bedroom count.
    #[must_use]
    pub fn with_beds(mut self, beds: impl Into<String>) -> Self {
        self.beds = Some(beds.into());
        self
    }

    /// Set the bathroom count.
    #[must_use]
    pub fn with_baths(mut self, baths: impl Into<String>) -> Self {
        self.baths = Some(baths.into());
        self
    }

    /// Set the surface area.
    #[must_use]
    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    /// Set the coarse place name.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Set the fine place name.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the asking price.
    #[must_use]
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    /// True when no attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.beds.is_none()
            && self.baths.is_none()
            && self.area.is_none()
            && self.city.is_none()
            && self.location.is_none()
            && self.price.is_none()
    }
}
