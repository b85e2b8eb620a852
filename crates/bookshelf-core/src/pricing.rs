//! # Pricing Module
//!
//! The four pricing operations, evaluated against an immutable [`Catalog`].
//!
//! ## Call Graph
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   discounted_price ──┐                                                  │
//! │   total_price ───────┼──► lookup_price ──► Catalog::get                 │
//! │   combine_prices ────┘         │                                        │
//! │                                └── unknown id → 0 (sentinel, no error) │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sentinel 0
//! An unknown book prices at 0. A book listed at exactly 0 is therefore
//! indistinguishable from an unknown one in [`PricingEngine::discounted_price`]
//! and [`PricingEngine::combine_prices`]. Use [`PricingEngine::find_price`]
//! when the difference matters.

use tracing::debug;

use crate::catalog::Catalog;
use crate::BUNDLE_DISCOUNT_FACTOR;

/// Stateless pricing over a fixed catalog.
///
/// ## Example
/// ```rust
/// use bookshelf_core::PricingEngine;
///
/// let engine = PricingEngine::reference();
///
/// assert_eq!(engine.lookup_price("algorithms"), 45.00);
/// assert_eq!(engine.lookup_price("unknown"), 0.0);
/// assert_eq!(engine.discounted_price("web_dev", 0.0), 28.75);
/// assert_eq!(engine.total_price(["algorithms", "algorithms"]), 90.0);
/// assert_eq!(engine.combine_prices("algorithms", "unknown"), 45.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    catalog: Catalog,
}

impl PricingEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Engine over [`Catalog::reference`].
    pub fn reference() -> Self {
        Self::new(Catalog::reference())
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Price of `id`, distinguishing an unknown book (`None`) from a
    /// zero-priced one (`Some(0.0)`).
    #[inline]
    pub fn find_price(&self, id: &str) -> Option<f64> {
        self.catalog.get(id)
    }

    /// Price of `id`, or 0 when the book is not in the catalog.
    pub fn lookup_price(&self, id: &str) -> f64 {
        match self.catalog.get(id) {
            Some(price) => price,
            None => {
                debug!(book_id = %id, "Book not in catalog, pricing at 0");
                0.0
            }
        }
    }

    /// Price of `id` after a percentage discount.
    ///
    /// Returns 0 without applying the discount when the looked-up price is 0.
    /// The percentage is not clamped: 100 gives 0, above 100 gives a negative
    /// price, below 0 gives a markup.
    ///
    /// ```rust
    /// use bookshelf_core::PricingEngine;
    ///
    /// let engine = PricingEngine::reference();
    /// assert_eq!(engine.discounted_price("machine_learning", 50.0), 27.625);
    /// assert_eq!(engine.discounted_price("algorithms", 100.0), 0.0);
    /// assert_eq!(engine.discounted_price("algorithms", 200.0), -45.0);
    /// ```
    pub fn discounted_price(&self, id: &str, discount_percent: f64) -> f64 {
        let price = self.lookup_price(id);
        if price == 0.0 {
            return 0.0;
        }
        price * (1.0 - discount_percent / 100.0)
    }

    /// Sum of the prices of `ids`, left to right.
    ///
    /// Duplicates count once per occurrence; unknown books add 0.
    pub fn total_price<I, S>(&self, ids: I) -> f64
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter()
            .map(|id| self.lookup_price(id.as_ref()))
            .fold(0.0, |total, price| total + price)
    }

    /// Bundle price of two books.
    ///
    /// Both prices nonzero: their sum less the 10% bundle discount. Otherwise
    /// the plain sum. Bundling a book with itself is discounted too.
    pub fn combine_prices(&self, id_a: &str, id_b: &str) -> f64 {
        let price_a = self.lookup_price(id_a);
        let price_b = self.lookup_price(id_b);

        if price_a == 0.0 || price_b == 0.0 {
            return price_a + price_b;
        }

        (price_a + price_b) * BUNDLE_DISCOUNT_FACTOR
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
