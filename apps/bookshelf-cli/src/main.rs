//! # Bookshelf Command-Line Entry Point
//!
//! ## Usage
//! ```bash
//! bookshelf lookup algorithms                 # 45.00
//! bookshelf discount python_guide 10          # 23.39
//! bookshelf total python_guide web_dev        # 54.74
//! bookshelf bundle python_guide data_science  # 52.64
//! bookshelf --catalog ./books.json catalog
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr)
//! 2. Load configuration from the environment
//! 3. Run the command and print the result

use std::env;
use std::process::ExitCode;

use bookshelf_cli::{CliConfig, CliError};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(err) => return report(CliError::from(err)),
    };

    match bookshelf_cli::run(env::args_os(), config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => report(err),
    }
}

fn report(err: CliError) -> ExitCode {
    debug!(error = ?err, "Command failed");
    match &err {
        // clap formats its own "error:" prefix and usage hint
        CliError::Args(args) => eprint!("{args}"),
        _ => eprintln!("error: {err}"),
    }
    ExitCode::from(err.exit_code())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages (including unknown-book misses)
/// - Default: warnings, plus info from the bookshelf crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,bookshelf_core=info,bookshelf_cli=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
