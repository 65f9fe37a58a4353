//! Error types for bond calculations.

use bondcalc_core::{CoreError, ValidationErrors};
use bondcalc_math::MathError;
use thiserror::Error;

/// A specialized Result type for bond calculations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during a bond calculation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// Inputs failed the shared validation rules.
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    /// The price residual does not change sign over the feasible rate range.
    #[error(
        "No yield to maturity reproduces a price of {market_price} within per-period rates [{lower}, {upper}]"
    )]
    NoYieldInRange {
        /// Target market price.
        market_price: f64,
        /// Lower per-period rate bound.
        lower: f64,
        /// Upper per-period rate bound.
        upper: f64,
    },

    /// The yield solver gave up.
    #[error("Yield calculation failed: {0}")]
    YieldSolverFailed(#[source] MathError),

    /// Cash flow generation failed.
    #[error("Cash flow generation failed: {reason}")]
    CashFlowFailed {
        /// Description of the failure.
        reason: String,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    CoreError(#[from] CoreError),
}

impl BondError {
    /// Creates a cash flow error.
    #[must_use]
    pub fn cash_flow_failed(reason: impl Into<String>) -> Self {
        Self::CashFlowFailed {
            reason: reason.into(),
        }
    }

    /// Returns true if the error is caused by the caller's inputs.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BondError::Validation(_) | BondError::CoreError(CoreError::Validation(_))
        )
    }
}
