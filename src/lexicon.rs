//! Static lexicon and pattern tables.
//!
//! Everything here is immutable, process-wide configuration, compiled once
//! on first use (`Lazy`) and shared by reference across workers. Table
//! *order* is load-bearing: the conflict resolver breaks ties between
//! equal-length candidates by pooling order, so the order of entries below
//! is part of the engine's observable behavior, not a style choice. Do not
//! alphabetize.
//!
//! Vocabulary and patterns cover two markets' conventions at once: French
//! listings (TND, m², "salle de bain", S+N/TN type codes) and English ones
//! (taka/USD, sq ft, "4BR 2BA" abbreviations).

use annonce_core::Label;
use once_cell::sync::Lazy;
use regex::Regex;

// =============================================================================
// Keyword lexicon
// =============================================================================

/// Fixed vocabulary, each term mapped to its category.
///
/// Bilingual by design: "villa" and "maison" both map to TYPE, "sale" and
/// "vente" both to TRANSACTION. The same surface form can mean different
/// things across languages — French "location" (rental) is a TRANSACTION
/// term even though LOCATION is also a category; place names themselves are
/// never keywords and only enter via structured attributes.
pub static KEYWORDS: &[(&str, Label)] = &[
    // Property type
    ("flat", Label::Type),
    ("apartment", Label::Type),
    ("house", Label::Type),
    ("villa", Label::Type),
    ("studio", Label::Type),
    ("maison", Label::Type),
    ("appartement", Label::Type),
    ("t2", Label::Type),
    ("t3", Label::Type),
    ("t4", Label::Type),
    ("t5", Label::Type),
    ("s+2", Label::Type),
    ("s+3", Label::Type),
    ("s+4", Label::Type),
    ("s+5", Label::Type),
    ("duplex", Label::Type),
    ("penthouse", Label::Type),
    // Transaction
    ("sale", Label::Transaction),
    ("rent", Label::Transaction),
    ("buy", Label::Transaction),
    ("vendre", Label::Transaction),
    ("louer", Label::Transaction),
    ("acheter", Label::Transaction),
    ("vente", Label::Transaction),
    ("location", Label::Transaction),
    // Amenities
    ("piscine", Label::Amenity),
    ("pool", Label::Amenity),
    ("jardin", Label::Amenity),
    ("garden", Label::Amenity),
    ("balcon", Label::Amenity),
    ("balcony", Label::Amenity),
    ("terrace", Label::Amenity),
    ("terrasse", Label::Amenity),
    // Garage
    ("garage", Label::Garage),
    ("parking", Label::Garage),
    // Condition
    ("rénover", Label::Condition),
    ("neuf", Label::Condition),
    ("moderne", Label::Condition),
    ("nouveau", Label::Condition),
    ("new", Label::Condition),
    ("modern", Label::Condition),
    ("luxe", Label::Condition),
    ("luxury", Label::Condition),
    ("rénové", Label::Condition),
];

/// Whether a keyword must match on word boundaries.
///
/// Ordinary words ("villa", "neuf") must not fire inside longer words
/// ("villager"). Compact codes ("t3", "s+4") and other short terms have no
/// usable boundary semantics — "\bs+2\b" would reject "S+2" glued to
/// punctuation layouts that listings actually use — so they match as plain
/// substrings.
fn needs_word_boundaries(term: &str) -> bool {
    term.chars().count() > 2 && !term.chars().any(|c| c.is_ascii_digit() || c == '+')
}

/// Compiled keyword matchers, in [`KEYWORDS`] order.
///
/// Case-insensitive even though matching runs on folded text.
pub static KEYWORD_PATTERNS: Lazy<Vec<(Regex, Label)>> = Lazy::new(|| {
    KEYWORDS
        .iter()
        .map(|&(term, label)| {
            let escaped = regex::escape(term);
            let pattern = if needs_word_boundaries(term) {
                format!(r"(?i)\b{escaped}\b")
            } else {
                format!("(?i){escaped}")
            };
            let regex = Regex::new(&pattern).expect("valid keyword pattern");
            (regex, label)
        })
        .collect()
});

// =============================================================================
// Pattern families
// =============================================================================
// Static regexes, compiled once. Several alternates carry mojibake forms
// (mÂ², à§³): scraped feeds that went through a UTF-8-as-Latin-1 round trip
// deliver "m²" as "mÂ²" and the taka sign "৳" as "à§³", and those rows
// still need their AREA/PRICE spans.

static AREA_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d+[.,]?\d*\s*(?:m\s?2|m²|mÂ²|sq\s?ft|square\s?feet|mètres\s?carrés)")
        .expect("valid regex")
});

static AREA_SQFT_COMPACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\d+\s*sqft").expect("valid regex"));

static AREA_M2_COMPACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\d+m2").expect("valid regex"));

static AREA_SQM_COMPACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\d+m²").expect("valid regex"));

static PRICE_AMOUNT_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d+[.,]?\d*\s*(?:tnd|t\b|taka|euros?|usd|dollars?|\$|€|à§³)")
        .expect("valid regex")
});

static PRICE_TAKA_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)à§³\s*\d+[.,]?\d*").expect("valid regex"));

static PRICE_DOLLAR_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\$\s*\d+[.,]?\d*").expect("valid regex"));

static PRICE_EURO_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)€\s*\d+[.,]?\d*").expect("valid regex"));

static PRICE_COMPACT_K: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\d+\s*k").expect("valid regex"));

static ROOMS_BEDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d+\s*(?:bedrooms?|chambres?|beds?\b|br\b)").expect("valid regex")
});

static ROOMS_BATHS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d+\s*(?:bathrooms?|baths?\b|ba\b|salle\s*de\s*bains?)")
        .expect("valid regex")
});

static ROOMS_TYPE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:s\+|t)\d+").expect("valid regex"));

static GARAGE_PLACES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:parking|garage)(?:\s+\d+)?\s*places?").expect("valid regex")
});

static GARAGE_INCLUS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)parking\s+inclus").expect("valid regex"));

static GARAGE_AVEC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)avec\s+(?:parking|garage)").expect("valid regex"));

/// Surface-area patterns, in application order.
pub static AREA_PATTERNS: Lazy<Vec<&'static Regex>> = Lazy::new(|| {
    vec![
        &*AREA_UNIT,
        &*AREA_SQFT_COMPACT,
        &*AREA_M2_COMPACT,
        &*AREA_SQM_COMPACT,
    ]
});

/// Price patterns (unit-suffixed, symbol-prefixed, compact "50k"), in
/// application order.
pub static PRICE_PATTERNS: Lazy<Vec<&'static Regex>> = Lazy::new(|| {
    vec![
        &*PRICE_AMOUNT_UNIT,
        &*PRICE_TAKA_PREFIX,
        &*PRICE_DOLLAR_PREFIX,
        &*PRICE_EURO_PREFIX,
        &*PRICE_COMPACT_K,
    ]
});

/// The combined rooms family. One shared pattern list produces BEDS, BATHS
/// *and* TYPE candidates; each match is classified by its own text (see
/// `sources::patterns::classify_rooms_match`), not by which pattern fired.
pub static ROOMS_PATTERNS: Lazy<Vec<&'static Regex>> =
    Lazy::new(|| vec![&*ROOMS_BEDS, &*ROOMS_BATHS, &*ROOMS_TYPE_CODE]);

/// Garage/parking phrase patterns, in application order.
pub static GARAGE_PATTERNS: Lazy<Vec<&'static Regex>> =
    Lazy::new(|| vec![&*GARAGE_PLACES, &*GARAGE_INCLUS, &*GARAGE_AVEC]);

/// Compact type-code shape ("s+4", "t3"), anchored at the start of a
/// matched text. Used to pull TYPE matches out of the rooms family.
pub static TYPE_CODE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:s\+\d+|t\d+)").expect("valid regex"));
