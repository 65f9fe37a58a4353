//! # Bondcalc Bonds
//!
//! Bond calculations for the Bondcalc bond yield calculator.
//!
//! This crate provides:
//!
//! - **Cash Flows**: periodic coupon schedule of a fixed-coupon bullet bond
//! - **Pricing**: current yield, yield to maturity, premium/discount
//!   classification
//! - **Calculator**: the validated, end-to-end calculation producing a
//!   [`BondCalculationResponse`](bondcalc_core::BondCalculationResponse)
//!
//! ## Example
//!
//! ```rust
//! use bondcalc_bonds::BondCalculator;
//! use bondcalc_core::{BondDefaults, PremiumDiscountIndicator};
//! use chrono::NaiveDate;
//!
//! let issue = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
//! let response = BondCalculator::new()
//!     .calculate(&BondDefaults::inputs(), issue)
//!     .unwrap();
//!
//! assert_eq!(response.cash_flow_schedule.len(), 10);
//! assert_eq!(response.premium_or_discount, PremiumDiscountIndicator::Discount);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]

pub mod calculator;
pub mod cashflows;
pub mod error;
pub mod pricing;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calculator::BondCalculator;
    pub use crate::cashflows::{generate_schedule, payment_date};
    pub use crate::error::{BondError, BondResult};
    pub use crate::pricing::{classify, current_yield, YieldResult, YieldSolver};
}

pub use calculator::BondCalculator;
pub use error::{BondError, BondResult};
