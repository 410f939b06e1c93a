//! Pattern matcher: regex families over the folded title.
//!
//! Four families run in a fixed order — rooms (the combined BEDS/BATHS/TYPE
//! family), AREA, PRICE, GARAGE. Patterns within a family are independent
//! and may produce overlapping matches on the same region; everything is
//! emitted and the resolver alone decides what survives.

use crate::lexicon::{
    AREA_PATTERNS, GARAGE_PATTERNS, PRICE_PATTERNS, ROOMS_PATTERNS, TYPE_CODE_SHAPE,
};
use crate::offset::SpanConverter;
use annonce_core::{Label, Span};
use regex::Regex;

/// Emit candidates for every pattern-family match in the folded title.
pub(crate) fn candidates(folded: &str, converter: &SpanConverter, out: &mut Vec<Span>) {
    for regex in ROOMS_PATTERNS.iter() {
        for m in regex.find_iter(folded) {
            out.push(Span::new(
                converter.byte_to_char(m.start()),
                converter.byte_to_char(m.end()),
                classify_rooms_match(m.as_str()),
            ));
        }
    }
    family(folded, converter, &AREA_PATTERNS, Label::Area, out);
    family(folded, converter, &PRICE_PATTERNS, Label::Price, out);
    family(folded, converter, &GARAGE_PATTERNS, Label::Garage, out);
}

/// Run one direct-mapped family: every match gets the family label.
fn family(
    folded: &str,
    converter: &SpanConverter,
    patterns: &[&Regex],
    label: Label,
    out: &mut Vec<Span>,
) {
    for regex in patterns {
        for m in regex.find_iter(folded) {
            out.push(Span::new(
                converter.byte_to_char(m.start()),
                converter.byte_to_char(m.end()),
                label,
            ));
        }
    }
}

/// Classify a rooms-family match by its own text, not by the pattern that
/// produced it. Rules apply in order, first hit wins:
///
/// 1. compact type-code shape ("s+4", "t3") → TYPE
/// 2. any bath marker ("bath", "salle", "ba") → BATHS
/// 3. residual numeric-plus-room-noun → BEDS
///
/// The "ba" marker is deliberately loose: it catches the "2BA" abbreviation
/// without a dedicated pattern, and none of the bedroom nouns the family
/// can match ("bedroom", "chambre", "bed", "br") contain it.
pub(crate) fn classify_rooms_match(matched: &str) -> Label {
    if TYPE_CODE_SHAPE.is_match(matched) {
        Label::Type
    } else if matched.contains("bath") || matched.contains("salle") || matched.contains("ba") {
        Label::Baths
    } else {
        Label::Beds
    }
}
