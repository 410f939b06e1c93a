//! Hand-curated bilingual seed corpus.
//!
//! These `(text, labels)` pairs bypass generation entirely: they are
//! literal ground truth appended to every training file exactly as written
//! here, offsets included. They exist to anchor the trainer on phrasings
//! the heuristic sources cover thinly (plural "salles de bain", symbol-first
//! prices, compact "4BR 2BA" strings) and on both languages in one title.
//!
//! Do not regenerate or "fix" entries through the annotator — the corpus is
//! curated data, not engine output, and is persisted unchanged.

use annonce_core::{Label, Record, Span};

use Label::{Amenity, Area, Baths, Beds, Condition, Garage, Location, Price, Transaction, Type};

type SeedEntry = (&'static str, &'static [(usize, usize, Label)]);

static SEED: &[SeedEntry] = &[
    // --- French, basics ---
    (
        "Appartement S+3 de 120 m² à LOUER à Tunis. État à rénover.",
        &[
            (0, 11, Type),
            (12, 15, Type),
            (19, 25, Area),
            (28, 33, Transaction),
            (36, 41, Location),
            (51, 58, Condition),
        ],
    ),
    (
        "ACHETER une villa NEUVE de 300 mètres carrés avec PISCINE et garage.",
        &[
            (0, 7, Transaction),
            (12, 17, Type),
            (18, 23, Condition),
            (27, 44, Area),
            (50, 57, Amenity),
            (61, 67, Garage),
        ],
    ),
    (
        "Cherche T4 pour VENDRE. Quartier Carthage. Prix 750000 EUROS.",
        &[
            (8, 10, Type),
            (16, 22, Transaction),
            (33, 41, Location),
            (48, 61, Price),
        ],
    ),
    (
        "Maison 2 chambres et 1 salle de bain à La Marsa. Transaction rapide.",
        &[
            (0, 6, Type),
            (7, 17, Beds),
            (21, 37, Baths),
            (40, 48, Location),
        ],
    ),
    // --- French, prices and currencies ---
    ("Prix: 45000 TND", &[(6, 15, Price)]),
    ("Cost: 50000 USD", &[(6, 15, Price)]),
    ("750000 EUROS", &[(0, 12, Price)]),
    ("Budget max 1000000 t", &[(11, 20, Price)]),
    ("Prix de vente: 800000 TND", &[(15, 25, Price)]),
    // --- French, complex queries ---
    (
        "Je cherche à ACHETER un grand S+4 de 185 m2, avec un PARKING, dans un état MODERNE à Paris. Budget 950000 Euros.",
        &[
            (13, 20, Transaction),
            (31, 34, Type),
            (38, 44, Area),
            (54, 61, Garage),
            (76, 83, Condition),
            (86, 91, Location),
            (100, 114, Price),
        ],
    ),
    (
        "Villa avec piscine à vendre La Marsa budget 800000 TND",
        &[
            (0, 5, Type),
            (11, 18, Amenity),
            (21, 27, Transaction),
            (28, 36, Location),
            (44, 54, Price),
        ],
    ),
    (
        "Cherche studio neuf à louer centre ville maximum 600 euros",
        &[
            (8, 14, Type),
            (15, 19, Condition),
            (22, 27, Transaction),
            (49, 58, Price),
        ],
    ),
    (
        "Je veux acheter un appartement 3 chambres à Tunis avec parking",
        &[
            (8, 15, Transaction),
            (19, 30, Type),
            (31, 41, Beds),
            (44, 49, Location),
            (55, 62, Garage),
        ],
    ),
    // --- French, types and conditions ---
    (
        "Studio moderne à louer",
        &[(0, 6, Type), (7, 14, Condition), (17, 22, Transaction)],
    ),
    (
        "Villa de luxe à vendre",
        &[(0, 5, Type), (9, 13, Condition), (16, 22, Transaction)],
    ),
    (
        "Maison individuelle neuve",
        &[(0, 6, Type), (20, 25, Condition)],
    ),
    (
        "Appartement S+2 disponible",
        &[(0, 11, Type), (12, 15, Type)],
    ),
    // --- English, full listings ---
    (
        "4 Bedrooms Apartment for SALE in Dhaka, Area 1800 sq ft, Price 45000 t.",
        &[
            (0, 10, Beds),
            (11, 20, Type),
            (25, 29, Transaction),
            (33, 38, Location),
            (45, 55, Area),
            (64, 72, Price),
        ],
    ),
    (
        "RENT a flat in Mirpur with 1 BEDS, 2 BATHS.",
        &[
            (0, 4, Transaction),
            (7, 11, Type),
            (15, 21, Location),
            (27, 33, Beds),
            (35, 43, Baths),
        ],
    ),
    (
        "3 bedroom house for sale in Gulshan, 2000 square feet, 50000 USD",
        &[
            (0, 9, Beds),
            (10, 15, Type),
            (20, 24, Transaction),
            (28, 35, Location),
            (37, 53, Area),
            (55, 65, Price),
        ],
    ),
    (
        "Buy apartment in Banani with parking and pool",
        &[
            (0, 3, Transaction),
            (4, 13, Type),
            (17, 23, Location),
            (29, 36, Garage),
            (41, 45, Amenity),
        ],
    ),
    // --- English, numbers and units ---
    (
        "Apartment with 4 bedrooms and 3 bathrooms",
        &[(0, 9, Type), (15, 25, Beds), (30, 41, Baths)],
    ),
    ("Surface de 120 m² exactement", &[(11, 17, Area)]),
    ("Prix: 45000 USD seulement", &[(6, 15, Price)]),
    (
        "Villa 250 m2 avec 5 chambres",
        &[(0, 5, Type), (6, 12, Area), (18, 28, Beds)],
    ),
    (
        "Flat 1800 sq ft in Dhaka",
        &[(0, 4, Type), (5, 15, Area), (19, 24, Location)],
    ),
    // --- Mixed-language ---
    (
        "Luxury villa 5 BEDS 4 BATHS avec piscine et jardin à vendre Sousse 450000 TND",
        &[
            (0, 6, Condition),
            (7, 12, Type),
            (13, 19, Beds),
            (20, 27, Baths),
            (33, 40, Amenity),
            (44, 50, Amenity),
            (53, 59, Transaction),
            (60, 66, Location),
            (67, 78, Price),
        ],
    ),
    (
        "Studio neuf 45m² à louer La Marsa parking inclus 800 TND/mois",
        &[
            (0, 6, Type),
            (7, 11, Condition),
            (12, 16, Area),
            (19, 24, Transaction),
            (25, 33, Location),
            (34, 48, Garage),
            (49, 61, Price),
        ],
    ),
    (
        "T3 apartment for RENT in Tunis, 95 m2, 2 salles de bain, garage, rénové, 1200 euros",
        &[
            (0, 2, Type),
            (3, 12, Type),
            (17, 21, Transaction),
            (25, 30, Location),
            (32, 37, Area),
            (39, 55, Baths),
            (57, 63, Garage),
            (65, 71, Condition),
            (73, 84, Price),
        ],
    ),
    (
        "House T4 for sale",
        &[(0, 5, Type), (6, 8, Type), (13, 17, Transaction)],
    ),
    ("Flat for rent", &[(0, 4, Type), (9, 13, Transaction)]),
    // --- Realistic user queries ---
    (
        "Looking for 2 bedroom flat for rent in Dhaka under 20000 taka",
        &[
            (12, 21, Beds),
            (22, 26, Type),
            (31, 35, Transaction),
            (39, 44, Location),
            (51, 62, Price),
        ],
    ),
    (
        "Need house 4 beds 3 baths garage near school Gulshan",
        &[
            (5, 10, Type),
            (11, 17, Beds),
            (18, 25, Baths),
            (26, 32, Garage),
            (46, 53, Location),
        ],
    ),
    // --- Edge cases ---
    ("VENDRE", &[(0, 6, Transaction)]),
    ("Appartement", &[(0, 11, Type)]),
    ("Tunis", &[(0, 5, Location)]),
    (
        "SALE RENT BUY",
        &[(0, 4, Transaction), (5, 9, Transaction), (10, 13, Transaction)],
    ),
    // --- Abbreviated formats ---
    (
        "Apt 4BR 2BA 1500sqft $50k Dhaka pool garage",
        &[
            (4, 7, Beds),
            (8, 11, Baths),
            (12, 20, Area),
            (21, 25, Price),
            (26, 31, Location),
            (32, 36, Amenity),
            (37, 43, Garage),
        ],
    ),
    // --- Long, dense queries ---
    (
        "Je cherche un S+10 de 500m² avec 8 chambres et 6 salles de bain à Paris pour 5000000 euros avec piscine jardin garage parking",
        &[
            (14, 18, Type),
            (22, 27, Area),
            (33, 43, Beds),
            (47, 64, Baths),
            (67, 72, Location),
            (78, 92, Price),
            (98, 105, Amenity),
            (106, 112, Amenity),
            (113, 119, Garage),
            (120, 127, Garage),
        ],
    ),
    // --- Additional currencies (incl. a mojibake taka feed line) ---
    ("à§³50,000 taka", &[(0, 14, Price)]),
    ("$1,500 per month", &[(0, 6, Price)]),
    ("€950,000", &[(0, 8, Price)]),
];

/// Materialize the seed corpus as records, in curated order.
#[must_use]
pub fn seed_corpus() -> Vec<Record> {
    SEED.iter()
        .map(|&(text, spans)| {
            Record::new(
                text,
                spans
                    .iter()
                    .map(|&(start, end, label)| Span::new(start, end, label))
                    .collect(),
            )
        })
        .collect()
}

/// Number of curated entries.
#[must_use]
pub fn seed_len() -> usize {
    SEED.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_is_nonempty_and_stable_in_size() {
        assert_eq!(seed_len(), 42);
        assert_eq!(seed_corpus().len(), seed_len());
    }

    #[test]
    fn corpus_covers_all_ten_labels() {
        let corpus = seed_corpus();
        for label in Label::ALL {
            assert!(
                corpus
                    .iter()
                    .flat_map(|r| &r.labels)
                    .any(|s| s.label == label),
                "no seed entry carries {label}"
            );
        }
    }

    #[test]
    fn corpus_is_persisted_verbatim() {
        // Curated data is carried as-is: spot-check a French entry with
        // non-ASCII text and an abbreviated English one.
        let corpus = seed_corpus();
        let french = &corpus[0];
        assert_eq!(
            french.text,
            "Appartement S+3 de 120 m² à LOUER à Tunis. État à rénover."
        );
        assert_eq!(french.labels[2], Span::new(19, 25, Label::Area));

        let abbreviated = corpus
            .iter()
            .find(|r| r.text.starts_with("Apt 4BR"))
            .unwrap();
        assert_eq!(abbreviated.labels.len(), 7);
    }

    #[test]
    fn curated_spans_are_disjoint_and_ordered() {
        // The corpus is trusted data, but overlapping or unordered spans
        // would break the downstream trainer's alignment step; this holds
        // for every curated entry even where an offset is hand-counted.
        for record in seed_corpus() {
            for window in record.labels.windows(2) {
                assert!(
                    window[0].start <= window[1].start,
                    "unordered spans in {:?}",
                    record.text
                );
                assert!(
                    !window[0].overlaps(&window[1]),
                    "overlapping spans in {:?}",
                    record.text
                );
            }
        }
    }
}
