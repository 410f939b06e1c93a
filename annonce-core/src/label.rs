//! The closed label vocabulary for listing-title annotation.

use crate::error::ParseLabelError;
use serde::{Deserialize, Serialize};

/// Semantic category attached to a span of a listing title.
///
/// Ten fixed categories covering what a French or English real-estate
/// listing title can say about a property. The set is closed: serialization
/// uses the uppercase ASCII token and parsing rejects anything else.
///
/// # Example
///
/// ```rust
/// use annonce_core::Label;
///
/// assert_eq!(Label::Transaction.as_str(), "TRANSACTION");
/// assert_eq!("BEDS".parse::<Label>().unwrap(), Label::Beds);
/// assert!("PER".parse::<Label>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    /// Property kind: "villa", "appartement", or a compact code ("S+4", "T3").
    Type,
    /// Sale/rental intent: "vendre", "rent", "acheter", ...
    Transaction,
    /// Bedroom count phrase ("4 bedrooms", "3 chambres").
    Beds,
    /// Bathroom count phrase ("2 baths", "1 salle de bain").
    Baths,
    /// Surface area with unit ("120 m²", "1800 sq ft").
    Area,
    /// Price with currency ("45000 TND", "$50k").
    Price,
    /// Place name, sourced from structured attributes only.
    Location,
    /// Equipment: pool, garden, balcony, terrace (both languages).
    Amenity,
    /// Parking/garage phrases.
    Garage,
    /// State of the property: "neuf", "rénové", "luxury", ...
    Condition,
}

impl Label {
    /// All ten categories, in declaration order.
    pub const ALL: [Label; 10] = [
        Label::Type,
        Label::Transaction,
        Label::Beds,
        Label::Baths,
        Label::Area,
        Label::Price,
        Label::Location,
        Label::Amenity,
        Label::Garage,
        Label::Condition,
    ];

    /// The uppercase token used on the wire and in training files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Label::Type => "TYPE",
            Label::Transaction => "TRANSACTION",
            Label::Beds => "BEDS",
            Label::Baths => "BATHS",
            Label::Area => "AREA",
            Label::Price => "PRICE",
            Label::Location => "LOCATION",
            Label::Amenity => "AMENITY",
            Label::Garage => "GARAGE",
            Label::Condition => "CONDITION",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Label {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TYPE" => Ok(Label::Type),
            "TRANSACTION" => Ok(Label::Transaction),
            "BEDS" => Ok(Label::Beds),
            "BATHS" => Ok(Label::Baths),
            "AREA" => Ok(Label::Area),
            "PRICE" => Ok(Label::Price),
            "LOCATION" => Ok(Label::Location),
            "AMENITY" => Ok(Label::Amenity),
            "GARAGE" => Ok(Label::Garage),
            "CONDITION" => Ok(Label::Condition),
            other => Err(ParseLabelError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_all_labels() {
        for label in Label::ALL {
            let parsed: Label = label.as_str().parse().unwrap();
            assert_eq!(parsed, label);
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!("PERSON".parse::<Label>().is_err());
        assert!("type".parse::<Label>().is_err()); // case-sensitive on purpose
        assert!("".parse::<Label>().is_err());
    }

    #[test]
    fn serde_uses_uppercase_token() {
        let json = serde_json::to_string(&Label::Baths).unwrap();
        assert_eq!(json, "\"BATHS\"");
        let back: Label = serde_json::from_str("\"GARAGE\"").unwrap();
        assert_eq!(back, Label::Garage);
    }
}
