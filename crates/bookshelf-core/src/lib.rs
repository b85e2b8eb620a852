//! # bookshelf-core: Pure Pricing Logic for Bookshelf
//!
//! This crate holds the book catalog and the pricing rules built on it.
//! It performs no I/O and keeps no global state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Bookshelf Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    bookshelf-cli                                │   │
//! │  │    args ──► config ──► catalog file ──► command ──► stdout      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ bookshelf-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │  pricing  │  │ validation│  │   error   │  │   │
//! │  │   │  Catalog  │  │  Engine   │  │  entries  │  │  Catalog  │  │   │
//! │  │   │  Entry    │  │  4 ops    │  │  rules    │  │  Error    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Immutable book-to-price mapping
//! - [`pricing`] - Lookup, discount, total and bundle operations
//! - [`validation`] - Rules for catalog entries loaded from outside
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use bookshelf_core::PricingEngine;
//!
//! let engine = PricingEngine::reference();
//!
//! // Unknown books are not an error, they cost nothing
//! assert_eq!(engine.lookup_price("no_such_book"), 0.0);
//!
//! // Two known books get the 10% bundle discount
//! let bundle = engine.combine_prices("python_guide", "data_science");
//! assert!((bundle - 52.641).abs() < 1e-9);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod pricing;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, CatalogEntry};
pub use error::{CatalogError, CoreResult, ValidationError};
pub use pricing::PricingEngine;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Multiplier applied to the sum of two known books (10% off).
pub const BUNDLE_DISCOUNT_FACTOR: f64 = 0.9;
