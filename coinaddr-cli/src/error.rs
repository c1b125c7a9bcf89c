//! Error types for the CLI.

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] coinaddr::ValidationError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}
