//! Error types for the Bondcalc core library.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A coupon frequency string is not one of the recognized values.
    #[error("Unknown coupon frequency '{value}': expected one of annual, semiAnnual")]
    UnknownFrequency {
        /// The rejected value.
        value: String,
    },

    /// Bond inputs failed validation.
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
}

impl CoreError {
    /// Creates an unknown frequency error.
    #[must_use]
    pub fn unknown_frequency(value: impl Into<String>) -> Self {
        Self::UnknownFrequency {
            value: value.into(),
        }
    }
}
