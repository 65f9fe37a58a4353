//! CLI error types.

use bondcalc_bonds::BondError;
use bondcalc_client::ClientError;
use bondcalc_core::ValidationErrors;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bond inputs failed validation.
    #[error("Invalid bond inputs: {0}")]
    Validation(ValidationErrors),

    /// The API request failed; the message is the user-facing one.
    #[error("{0}")]
    Api(#[from] ClientError),

    /// Local calculation failed.
    #[error("Calculation error: {0}")]
    Calculation(#[from] BondError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid date argument.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<ValidationErrors> for CliError {
    fn from(errors: ValidationErrors) -> Self {
        CliError::Validation(errors)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        CliError::Serialization(err.to_string())
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
