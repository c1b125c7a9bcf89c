//! CLI configuration.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use coinaddr::CurrencyDefinition;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One tab-separated line per result.
    #[default]
    Text,
    /// A JSON array.
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::Invalid(format!("COINADDR_OUTPUT={}", value))),
        }
    }
}

/// CLI configuration loaded from environment.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// JSON file with extra currency definitions.
    pub currencies_file: Option<PathBuf>,
    /// Default output format.
    pub output: OutputFormat,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            currencies_file: lookup("COINADDR_CURRENCIES")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            output: lookup("COINADDR_OUTPUT")
                .map(|value| OutputFormat::parse(&value))
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

/// Read extra currency definitions from a JSON array.
pub fn load_currencies(path: &Path) -> Result<Vec<CurrencyDefinition>, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
