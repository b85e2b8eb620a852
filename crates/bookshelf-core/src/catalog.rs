//! # Catalog Module
//!
//! The fixed mapping from book identifier to price.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Catalog Lifecycle                                 │
//! │                                                                         │
//! │  Catalog::reference()  ─┐                                               │
//! │                         ├──► Catalog ──► PricingEngine ──► prices       │
//! │  Catalog::from_entries ─┘    (immutable for the whole run)              │
//! │       ▲                                                                 │
//! │       └── validated CatalogEntry list (e.g. parsed from JSON)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A catalog is never mutated after construction. A different price list
//! means building a new `Catalog` value.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::{CatalogError, CoreResult};
use crate::validation::validate_price;

/// Reference price list shipped with the crate.
pub const REFERENCE_PRICES: [(&str, f64); 5] = [
    ("python_guide", 25.99),
    ("data_science", 32.50),
    ("web_dev", 28.75),
    ("algorithms", 45.00),
    ("machine_learning", 55.25),
];

// =============================================================================
// Catalog Entry
// =============================================================================

/// One book and its price, the serialized unit of a catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Book identifier (free text, unique within a catalog).
    pub id: String,

    /// Price as a plain decimal number.
    pub price: f64,
}

impl CatalogEntry {
    pub fn new(id: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            price,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Immutable book-to-price mapping.
///
/// Serializes as a JSON array of [`CatalogEntry`] so that duplicate
/// identifiers in a file are detected instead of silently overwritten.
///
/// ## Example
/// ```rust
/// use bookshelf_core::{Catalog, CatalogEntry};
///
/// let catalog = Catalog::from_entries(vec![
///     CatalogEntry::new("rust_book", 39.95),
///     CatalogEntry::new("sicp", 0.0),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.get("rust_book"), Some(39.95));
/// assert_eq!(catalog.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CatalogEntry>", into = "Vec<CatalogEntry>")]
pub struct Catalog {
    prices: BTreeMap<String, f64>,
}

impl Catalog {
    /// Builds the five-entry reference catalog.
    pub fn reference() -> Self {
        let prices = REFERENCE_PRICES
            .iter()
            .map(|&(id, price)| (id.to_string(), price))
            .collect();
        Self { prices }
    }

    /// Builds a catalog from entries, validating each one.
    ///
    /// ## Errors
    /// - [`CatalogError::Validation`] for a non-finite price
    /// - [`CatalogError::DuplicateBook`] when an id repeats
    pub fn from_entries<I>(entries: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        let mut prices = BTreeMap::new();

        for entry in entries {
            validate_price(entry.price)?;

            if prices.contains_key(&entry.id) {
                return Err(CatalogError::DuplicateBook { id: entry.id });
            }
            prices.insert(entry.id, entry.price);
        }

        debug!(books = prices.len(), "Catalog built");
        Ok(Self { prices })
    }

    /// Price of `id`, or `None` when the book is not listed.
    #[inline]
    pub fn get(&self, id: &str) -> Option<f64> {
        self.prices.get(id).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// All entries, ordered by identifier.
    pub fn entries(&self) -> Vec<CatalogEntry> {
        self.prices
            .iter()
            .map(|(id, &price)| CatalogEntry::new(id.clone(), price))
            .collect()
    }
}

impl TryFrom<Vec<CatalogEntry>> for Catalog {
    type Error = CatalogError;

    fn try_from(entries: Vec<CatalogEntry>) -> CoreResult<Self> {
        Catalog::from_entries(entries)
    }
}

impl From<Catalog> for Vec<CatalogEntry> {
    fn from(catalog: Catalog) -> Self {
        catalog.entries()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_reference_catalog() {
        let catalog = Catalog::reference();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.get("python_guide"), Some(25.99));
        assert_eq!(catalog.get("data_science"), Some(32.50));
        assert_eq!(catalog.get("web_dev"), Some(28.75));
        assert_eq!(catalog.get("algorithms"), Some(45.00));
        assert_eq!(catalog.get("machine_learning"), Some(55.25));
        assert_eq!(catalog.get("unknown"), None);
    }

    #[test]
    fn test_entries_sorted_by_id() {
        let ids: Vec<String> = Catalog::reference()
            .entries()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(
            ids,
            vec![
                "algorithms",
                "data_science",
                "machine_learning",
                "python_guide",
                "web_dev"
            ]
        );
    }

    #[test]
    fn test_from_entries_accepts_zero_and_negative() {
        let catalog = Catalog::from_entries(vec![
            CatalogEntry::new("free_zine", 0.0),
            CatalogEntry::new("voucher", -5.0),
        ])
        .unwrap();
        assert_eq!(catalog.get("free_zine"), Some(0.0));
        assert_eq!(catalog.get("voucher"), Some(-5.0));
    }

    #[test]
    fn test_from_entries_rejects_duplicates() {
        let err = Catalog::from_entries(vec![
            CatalogEntry::new("web_dev", 28.75),
            CatalogEntry::new("web_dev", 30.00),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateBook { ref id } if id == "web_dev"));
    }

    #[test]
    fn test_from_entries_accepts_free_text_ids() {
        let long_id = "b".repeat(101);
        let catalog = Catalog::from_entries(vec![
            CatalogEntry::new("web dev", 28.75),
            CatalogEntry::new("", 1.00),
            CatalogEntry::new(long_id.clone(), 9.99),
            CatalogEntry::new("tab\there", 3.00),
        ])
        .unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get("web dev"), Some(28.75));
        assert_eq!(catalog.get(""), Some(1.00));
        assert_eq!(catalog.get(&long_id), Some(9.99));
        assert_eq!(catalog.get("tab\there"), Some(3.00));
    }

    #[test]
    fn test_from_entries_rejects_non_finite_price() {
        let err = Catalog::from_entries(vec![CatalogEntry::new("nan_book", f64::NAN)])
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Validation(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_entries(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog, Catalog::default());
    }

    #[test]
    fn test_json_array_format() {
        let json = r#"[{"id":"a","price":1.5},{"id":"b","price":2.0}]"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.get("a"), Some(1.5));
        assert_eq!(catalog.get("b"), Some(2.0));

        let back = serde_json::to_string(&catalog).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn test_json_duplicate_rejected() {
        let json = r#"[{"id":"a","price":1.5},{"id":"a","price":2.0}]"#;
        let result: Result<Catalog, _> = serde_json::from_str(json);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Duplicate book in catalog: a"));
    }
}
