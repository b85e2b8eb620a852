//! # Validation Module
//!
//! Rules applied when a catalog is built from external data.
//!
//! ## Scope
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Runs                              │
//! │                                                                         │
//! │  Catalog file ──► CatalogEntry ──► THIS MODULE ──► Catalog              │
//! │                                                                         │
//! │  Book identifiers are free text everywhere: a catalog may list any     │
//! │  string, and lookups accept any string. Only prices are checked.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookshelf_core::validation::validate_price;
//!
//! assert!(validate_price(25.99).is_ok());
//! assert!(validate_price(f64::NAN).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a catalog price.
///
/// Only finiteness is checked. Zero and negative prices are accepted;
/// a zero price behaves like an unknown book in discount and bundle math.
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
            value: price,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_rules() {
        assert!(validate_price(25.99).is_ok());
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(-4.50).is_ok());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
        assert!(validate_price(f64::NEG_INFINITY).is_err());
    }
}
