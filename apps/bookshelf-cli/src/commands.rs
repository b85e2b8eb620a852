//! # Commands
//!
//! Command-line definitions, dispatch to [`PricingEngine`], and result
//! rendering.
//!
//! ## Command Flow
//! ```text
//! args ──► Cli::try_parse_from ──► Cli { command, --catalog, --json }
//!                                        │
//!                                        ▼
//!                     Command::execute(&PricingEngine) ──► Outcome
//!                                                            │
//!                                                            ▼
//!                                        render(OutputFormat) ──► String
//! ```

use std::path::PathBuf;

use bookshelf_core::{CatalogEntry, PricingEngine};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::CliResult;

// =============================================================================
// Argument Definitions
// =============================================================================

/// The `bookshelf` command line.
#[derive(Debug, Parser)]
#[command(name = "bookshelf")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Price books from a fixed catalog")]
pub struct Cli {
    /// Load catalog from a JSON file (overrides BOOKSHELF_CATALOG)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Print results as JSON
    #[arg(short, long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Output format requested on the command line, if any.
    pub fn output(&self) -> Option<OutputFormat> {
        self.json.then_some(OutputFormat::Json)
    }
}

/// Pricing subcommands.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Price of one book (0 if unknown)
    Lookup { id: String },
    /// Price after a percentage discount
    Discount {
        id: String,
        /// Discount in percent; negative values mark the price up
        #[arg(allow_negative_numbers = true, value_parser = parse_percent)]
        percent: f64,
    },
    /// Sum of book prices
    Total { ids: Vec<String> },
    /// Price of two books with the 10% bundle discount
    Bundle { id_a: String, id_b: String },
    /// List catalog entries
    Catalog,
}

fn parse_percent(value: &str) -> Result<f64, String> {
    let percent: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if !percent.is_finite() {
        return Err(format!("'{value}' is not a finite number"));
    }
    Ok(percent)
}

// =============================================================================
// Execution
// =============================================================================

/// A priced result, serialized as-is for `--json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub operation: &'static str,
    pub books: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Quote(Quote),
    Listing(Vec<CatalogEntry>),
}

impl Command {
    pub fn execute(&self, engine: &PricingEngine) -> Outcome {
        match self {
            Command::Lookup { id } => Outcome::Quote(Quote {
                operation: "lookup",
                books: vec![id.clone()],
                discount_percent: None,
                price: engine.lookup_price(id),
            }),
            Command::Discount { id, percent } => Outcome::Quote(Quote {
                operation: "discount",
                books: vec![id.clone()],
                discount_percent: Some(*percent),
                price: engine.discounted_price(id, *percent),
            }),
            Command::Total { ids } => Outcome::Quote(Quote {
                operation: "total",
                books: ids.clone(),
                discount_percent: None,
                price: engine.total_price(ids),
            }),
            Command::Bundle { id_a, id_b } => Outcome::Quote(Quote {
                operation: "bundle",
                books: vec![id_a.clone(), id_b.clone()],
                discount_percent: None,
                price: engine.combine_prices(id_a, id_b),
            }),
            Command::Catalog => Outcome::Listing(engine.catalog().entries()),
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Folds `-0.0` into `0.0` so a zeroed negative price prints as `0.00`.
fn normalize_zero(price: f64) -> f64 {
    if price == 0.0 {
        0.0
    } else {
        price
    }
}

impl Outcome {
    /// Renders the outcome.
    ///
    /// Text prints prices with two decimals. JSON keeps the raw value; an
    /// overflowed (infinite) total prints as `inf` in text and `null` in JSON.
    pub fn render(&self, format: OutputFormat) -> CliResult<String> {
        let text = match (self, format) {
            (Outcome::Quote(quote), OutputFormat::Text) => {
                format!("{:.2}", normalize_zero(quote.price))
            }
            (Outcome::Quote(quote), OutputFormat::Json) => {
                let quote = Quote {
                    price: normalize_zero(quote.price),
                    ..quote.clone()
                };
                serde_json::to_string_pretty(&quote)?
            }
            (Outcome::Listing(entries), OutputFormat::Text) => entries
                .iter()
                .map(|entry| format!("{}\t{:.2}", entry.id, normalize_zero(entry.price)))
                .collect::<Vec<_>>()
                .join("\n"),
            (Outcome::Listing(entries), OutputFormat::Json) => {
                serde_json::to_string_pretty(entries)?
            }
        };
        Ok(text)
    }
}
