//! # Bookshelf CLI Library
//!
//! Wires configuration, catalog loading and the pricing engine together.
//! The binary in `main.rs` only sets up logging and maps errors to exit
//! codes; everything else lives here so it can be tested.
//!
//! ## Run Sequence
//! 1. Parse arguments into a [`Cli`]
//! 2. Merge flags over the environment [`CliConfig`]
//! 3. Load the catalog (file or reference)
//! 4. Execute the command against a [`PricingEngine`]
//! 5. Render text or JSON

pub mod commands;
pub mod config;
pub mod error;
pub mod loader;

use std::ffi::OsString;

use bookshelf_core::PricingEngine;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;

pub use commands::{Cli, Command, Outcome, Quote};
pub use config::{CliConfig, ConfigError, OutputFormat};
pub use error::{CliError, CliResult};

/// Runs one command line (program name first) and returns what should be
/// printed. `--help` and `--version` return their text as success.
pub fn run<I, T>(args: I, config: CliConfig) -> CliResult<String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return Ok(err.render().to_string().trim_end().to_string());
        }
        Err(err) => return Err(err.into()),
    };
    debug!(command = ?cli.command, "Parsed command line");

    let output = cli.output().unwrap_or(config.output);
    let catalog_path = cli.catalog.or(config.catalog_path);

    let catalog = loader::load_catalog(catalog_path.as_deref())?;
    let engine = PricingEngine::new(catalog);

    cli.command.execute(&engine).render(output)
}
