//! # Error Types
//!
//! Domain-specific error types for bookshelf-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bookshelf-core errors (this file)                                     │
//! │  ├── CatalogError     - Catalog construction failures                  │
//! │  └── ValidationError  - Entry validation failures                      │
//! │                                                                         │
//! │  bookshelf-cli errors (app crate)                                      │
//! │  └── CliError         - What the terminal sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CatalogError → CliError → stderr              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Note
//! Pricing operations never return these. An unknown book prices at 0.
//! Errors only arise while building a catalog from external data.

use thiserror::Error;

// =============================================================================
// Catalog Error
// =============================================================================

/// Errors raised while constructing a [`Catalog`](crate::Catalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The same book identifier appears twice.
    ///
    /// ## When This Occurs
    /// - A catalog file lists `python_guide` in two entries
    #[error("Duplicate book in catalog: {id}")]
    DuplicateBook { id: String },

    /// An entry failed validation (wraps ValidationError).
    #[error("Invalid catalog entry: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog entry validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Numeric value is NaN or infinite.
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: String, value: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CatalogError.
pub type CoreResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::DuplicateBook {
            id: "web_dev".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate book in catalog: web_dev");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::NotFinite {
            field: "price".to_string(),
            value: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "price must be a finite number, got inf");
    }

    #[test]
    fn test_validation_converts_to_catalog_error() {
        let validation_err = ValidationError::NotFinite {
            field: "price".to_string(),
            value: f64::NAN,
        };
        let catalog_err: CatalogError = validation_err.into();
        assert!(matches!(catalog_err, CatalogError::Validation(_)));
    }
}
