//! CSV ingest boundary: listing rows in, `(title, attributes)` pairs out.
//!
//! The engine never touches files; this module adapts the listing feed's
//! tabular shape to [`ListingAttributes`]. Expected columns (header names
//! are trimmed before lookup, feeds pad them inconsistently):
//!
//! | Column      | Attribute  |
//! |-------------|------------|
//! | `Title`     | the text (required) |
//! | `Bedrooms`  | beds       |
//! | `Bathroom`  | baths      |
//! | `Area_sqFt` | area       |
//! | `City`      | location (coarse) |
//! | `Location`  | location (fine)   |
//! | `Price_in_t`| price      |
//!
//! Empty cells become `None` (skip field matching). One quirk of the
//! supported feeds: a file with no `Bathroom` column at all gets
//! `baths = "0"` on every row.

use crate::attrs::ListingAttributes;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One ingested listing row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    /// The free-text title, exactly as it appears in the feed.
    pub title: String,
    /// Structured attributes parsed from the remaining columns.
    pub attrs: ListingAttributes,
}

/// Read listing rows from any CSV reader.
///
/// Fails fast on a missing `Title` column or malformed CSV; a missing
/// *optional* column just disables that attribute (except the `Bathroom`
/// quirk documented at module level).
pub fn read_listings<R: Read>(reader: R) -> Result<Vec<ListingRow>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h.trim() == name);

    let title_col = column("Title").ok_or_else(|| Error::missing_column("Title"))?;
    let beds_col = column("Bedrooms");
    let baths_col = column("Bathroom");
    let area_col = column("Area_sqFt");
    let city_col = column("City");
    let location_col = column("Location");
    let price_col = column("Price_in_t");

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let cell = |col: Option<usize>| {
            col.and_then(|i| record.get(i))
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let mut attrs = ListingAttributes {
            beds: cell(beds_col),
            baths: cell(baths_col),
            area: cell(area_col),
            city: cell(city_col),
            location: cell(location_col),
            price: cell(price_col),
        };
        if baths_col.is_none() {
            attrs.baths = Some("0".to_string());
        }

        rows.push(ListingRow {
            title: record.get(title_col).unwrap_or("").to_string(),
            attrs,
        });
    }

    log::debug!("ingested {} listing rows", rows.len());
    Ok(rows)
}

/// Read listing rows from a CSV file on disk.
pub fn read_listings_path(path: impl AsRef<Path>) -> Result<Vec<ListingRow>> {
    read_listings(File::open(path)?)
}
