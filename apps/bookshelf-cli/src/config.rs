//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//! Command-line flags override what is loaded here.
//!
//! | Variable             | Default | Meaning                          |
//! |----------------------|---------|----------------------------------|
//! | `BOOKSHELF_CATALOG`  | unset   | Path to a JSON catalog file      |
//! | `BOOKSHELF_OUTPUT`   | `text`  | `text` or `json`                 |

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const CATALOG_ENV: &str = "BOOKSHELF_CATALOG";
pub const OUTPUT_ENV: &str = "BOOKSHELF_OUTPUT";

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Prices with two decimals, one per line.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Catalog file; the reference catalog is used when absent
    pub catalog_path: Option<PathBuf>,

    /// Output format
    pub output: OutputFormat,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_path = lookup(CATALOG_ENV)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let output = match lookup(OUTPUT_ENV) {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue(OUTPUT_ENV.to_string()))?,
            None => OutputFormat::default(),
        };

        Ok(CliConfig {
            catalog_path,
            output,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
