//! # CLI Error Types
//!
//! What the terminal sees when a command cannot run.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  clap::Error (bad command line) ────┐                                   │
//! │  ValidationError ──► CatalogError ──┤                                   │
//! │  std::io::Error (catalog file) ─────┼──► CliError ──► stderr + exit code│
//! │  serde_json::Error ─────────────────┤                                   │
//! │  ConfigError (environment) ─────────┘                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use bookshelf_core::CatalogError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `bookshelf` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad command line; clap renders the message and usage.
    #[error("{0}")]
    Args(#[from] clap::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog entries were well-formed JSON but broke a catalog rule.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Catalog file could not be read.
    #[error("Failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not a JSON array of entries.
    #[error("Malformed catalog {}: {source}", path.display())]
    CatalogFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Result could not be encoded as JSON.
    #[error("Output encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit status: clap's code for command-line errors (2 for
    /// usage problems), 1 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Args(err) => u8::try_from(err.exit_code()).unwrap_or(2),
            _ => 1,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
