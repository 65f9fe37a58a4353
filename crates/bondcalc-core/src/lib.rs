//! # Bondcalc Core
//!
//! Core types and the shared validation contract for the Bondcalc bond yield
//! calculator.
//!
//! This crate provides the foundational building blocks used by every other
//! Bondcalc crate:
//!
//! - **Types**: `BondInputs`, `CouponFrequency`, `CashFlowScheduleItem`,
//!   `BondCalculationResponse` and the raw `BondForm`
//! - **Validation**: one declarative rule table consumed by the client, the
//!   CLI and the HTTP service
//!
//! ## Wire Format
//!
//! All types serialize with camelCase field names so they match the
//! `POST /api/v1/bonds/calculate` JSON contract exactly.
//!
//! ## Example
//!
//! ```rust
//! use bondcalc_core::prelude::*;
//!
//! let form = BondForm {
//!     face_value: Some(1000.0),
//!     annual_coupon_rate: Some(5.0),
//!     market_price: Some(950.0),
//!     years_to_maturity: Some(5.0),
//!     coupon_frequency: Some("semiAnnual".to_string()),
//! };
//!
//! let inputs = form.validate().unwrap();
//! assert_eq!(inputs.coupon_frequency, CouponFrequency::SemiAnnual);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;
pub mod validation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        BondCalculationResponse, BondDefaults, BondForm, BondInputs, CashFlowScheduleItem,
        CouponFrequency, PremiumDiscountIndicator,
    };
    pub use crate::validation::{Field, FieldError, ValidationErrors};
}

pub use error::{CoreError, CoreResult};
pub use types::{
    BondCalculationResponse, BondDefaults, BondForm, BondInputs, CashFlowScheduleItem,
    CouponFrequency, PremiumDiscountIndicator,
};
pub use validation::{Field, FieldError, ValidationErrors, MAX_YEARS_TO_MATURITY};
