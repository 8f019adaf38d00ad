//! Garment Category Normalization
//!
//! Maps free-text, multi-locale category labels ("Pantalón vaquero",
//! "Sneakers", "T-shirt") onto the three canonical garment classes the fit
//! algorithms know about. Unrecognized labels default to the upper-body
//! class, so resolution is total.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Canonical garment class. Every raw label resolves to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GarmentCategory {
    /// Tops, shirts, jackets; anything fitted over the torso
    Upper,

    /// Waist-fitted garments: trousers, jeans, shorts
    Pants,

    /// Footwear, fitted by foot length
    Shoes,
}

/// Labels that resolve to pants when matched as a whole token.
const PANTS_TOKENS: &[&str] = &[
    "pantalon",
    "pantalón",
    "pantalones",
    "vaqueros",
    "jeans",
    "trousers",
    "leggings",
    "joggers",
    "chinos",
    "shorts",
    "bermudas",
];

/// Labels that resolve to shoes when matched as a whole token.
const SHOE_TOKENS: &[&str] = &[
    "zapato",
    "zapatos",
    "zapatilla",
    "zapatillas",
    "calzado",
    "sneakers",
    "trainers",
    "botas",
    "boots",
    "sandalias",
    "sandals",
    "tenis",
];

/// Whole-token lookup table, built once on first use.
static EXACT_TOKENS: LazyLock<FxHashMap<&'static str, GarmentCategory>> = LazyLock::new(|| {
    let mut map = FxHashMap::default();
    for token in PANTS_TOKENS {
        map.insert(*token, GarmentCategory::Pants);
    }
    for token in SHOE_TOKENS {
        map.insert(*token, GarmentCategory::Shoes);
    }
    map
});

impl GarmentCategory {
    /// Resolve a raw category label to its canonical class.
    ///
    /// Matching order: whole token (trimmed, lower-cased), then substring
    /// fallback ("cargo pants", "running shoes"), then the `Upper` default.
    /// Empty and unrecognized labels are valid input and resolve to `Upper`.
    pub fn from_label(raw: &str) -> Self {
        let label = raw.trim().to_lowercase();

        if let Some(category) = EXACT_TOKENS.get(label.as_str()) {
            return *category;
        }
        if label.contains("pants") {
            return GarmentCategory::Pants;
        }
        if label.contains("shoe") {
            return GarmentCategory::Shoes;
        }
        GarmentCategory::Upper
    }

    /// Canonical name; also a valid `from_label` input, so normalizing an
    /// already-normalized label is a no-op.
    pub fn as_str(&self) -> &'static str {
        match self {
            GarmentCategory::Upper => "upper",
            GarmentCategory::Pants => "pants",
            GarmentCategory::Shoes => "shoes",
        }
    }

    /// Shopper-facing name
    pub fn display_name(&self) -> &'static str {
        match self {
            GarmentCategory::Upper => "parte superior",
            GarmentCategory::Pants => "pantalones",
            GarmentCategory::Shoes => "calzado",
        }
    }

    /// All canonical classes, in evaluation-report order
    pub fn all() -> &'static [GarmentCategory] {
        &[
            GarmentCategory::Upper,
            GarmentCategory::Pants,
            GarmentCategory::Shoes,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_token_matching() {
        assert_eq!(GarmentCategory::from_label("jeans"), GarmentCategory::Pants);
        assert_eq!(GarmentCategory::from_label("Vaqueros"), GarmentCategory::Pants);
        assert_eq!(GarmentCategory::from_label("  pantalón  "), GarmentCategory::Pants);
        assert_eq!(GarmentCategory::from_label("Zapatillas"), GarmentCategory::Shoes);
        assert_eq!(GarmentCategory::from_label("BOOTS"), GarmentCategory::Shoes);
    }

    #[test]
    fn test_substring_fallback() {
        assert_eq!(GarmentCategory::from_label("cargo pants"), GarmentCategory::Pants);
        assert_eq!(GarmentCategory::from_label("running shoes"), GarmentCategory::Shoes);
    }

    #[test]
    fn test_defaults_to_upper() {
        assert_eq!(GarmentCategory::from_label(""), GarmentCategory::Upper);
        assert_eq!(GarmentCategory::from_label("camiseta"), GarmentCategory::Upper);
        assert_eq!(GarmentCategory::from_label("jacket"), GarmentCategory::Upper);
        assert_eq!(GarmentCategory::from_label("???"), GarmentCategory::Upper);
    }

    #[test]
    fn test_canonical_names_resolve_to_themselves() {
        for category in GarmentCategory::all() {
            assert_eq!(GarmentCategory::from_label(category.as_str()), *category);
        }
    }

    #[test]
    fn test_shorts_is_pants_not_shoes() {
        // "shorts" must hit the whole-token table, not any substring rule
        assert_eq!(GarmentCategory::from_label("shorts"), GarmentCategory::Pants);
    }
}
