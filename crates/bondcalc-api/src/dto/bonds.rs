//! Bond calculation DTOs.
//!
//! The calculation endpoint accepts the raw bond form so that missing and
//! out-of-range fields are reported by the shared validation rules, and
//! answers with the calculator's response unchanged.

pub use bondcalc_core::{BondCalculationResponse, BondForm};

/// Body of `POST /api/v1/bonds/calculate`.
pub type CalculateBondRequest = BondForm;

/// Successful response of `POST /api/v1/bonds/calculate`.
pub type CalculateBondResponse = BondCalculationResponse;
