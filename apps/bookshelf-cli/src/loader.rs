//! # Catalog Loading
//!
//! Reads a catalog file into a [`Catalog`], or falls back to the
//! reference catalog when no file is configured.
//!
//! ## File Format
//! ```json
//! [
//!   { "id": "python_guide", "price": 25.99 },
//!   { "id": "algorithms",   "price": 45.00 }
//! ]
//! ```

use std::fs;
use std::path::Path;

use bookshelf_core::{Catalog, CatalogEntry};
use tracing::info;

use crate::error::{CliError, CliResult};

/// Loads the catalog from `path`, or the reference catalog for `None`.
pub fn load_catalog(path: Option<&Path>) -> CliResult<Catalog> {
    let Some(path) = path else {
        info!("Using reference catalog");
        return Ok(Catalog::reference());
    };

    let raw = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let entries: Vec<CatalogEntry> =
        serde_json::from_str(&raw).map_err(|source| CliError::CatalogFormat {
            path: path.to_path_buf(),
            source,
        })?;

    let catalog = Catalog::from_entries(entries)?;
    info!(path = %path.display(), books = catalog.len(), "Catalog loaded");

    Ok(catalog)
}
