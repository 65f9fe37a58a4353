//! Client error types.
//!
//! The `Display` text of every variant is the message shown to the user.

use bondcalc_core::ValidationErrors;
use thiserror::Error;

/// A specialized Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Shown when the API cannot be reached at all.
pub const CONNECTION_MESSAGE: &str =
    "Unable to connect to the server. Please ensure the backend is running.";

/// Errors returned by [`BondApiClient`](crate::BondApiClient).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The form failed validation before any request was sent.
    #[error("{0}")]
    Validation(ValidationErrors),

    /// The API answered with a non-success status.
    #[error("{message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Message derived from the response body.
        message: String,
    },

    /// Connection refused, DNS failure or timeout.
    #[error("{}", CONNECTION_MESSAGE)]
    Connection {
        /// Underlying transport error, for logs.
        detail: String,
    },

    /// Anything else, e.g. an undecodable success body.
    #[error("{0}")]
    Unexpected(String),

    /// The client configuration is unusable.
    #[error("{0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// HTTP status of a server error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message shown to the user.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<ValidationErrors> for ClientError {
    fn from(errors: ValidationErrors) -> Self {
        ClientError::Validation(errors)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            ClientError::Connection {
                detail: err.to_string(),
            }
        } else {
            ClientError::Unexpected(err.to_string())
        }
    }
}
