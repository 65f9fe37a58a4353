//! Bond inputs: the validated request and the raw form it comes from.

use serde::{Deserialize, Serialize};

use super::CouponFrequency;
use crate::validation::{self, ValidationErrors};

/// Validated parameters of a fixed-coupon bullet bond.
///
/// Produced by [`BondForm::validate`]; immutable once submitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondInputs {
    /// Face (par) value in currency units.
    pub face_value: f64,
    /// Annual coupon rate in percentage points (5.0 means 5%).
    pub annual_coupon_rate: f64,
    /// Market price in currency units.
    pub market_price: f64,
    /// Years until maturity.
    pub years_to_maturity: f64,
    /// Coupon payment frequency.
    pub coupon_frequency: CouponFrequency,
}

impl BondInputs {
    /// Checks these inputs against the shared validation rules.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        BondForm::from(*self).validate().map(|_| ())
    }

    /// Annual coupon amount in currency units.
    #[must_use]
    pub fn annual_coupon(&self) -> f64 {
        self.annual_coupon_rate / 100.0 * self.face_value
    }

    /// Number of coupon periods until maturity.
    #[must_use]
    pub fn total_periods(&self) -> u32 {
        self.coupon_frequency.periods_for(self.years_to_maturity)
    }
}

impl Default for BondInputs {
    fn default() -> Self {
        BondDefaults::inputs()
    }
}

/// Raw bond form as entered by a user or posted by a client.
///
/// Every field is optional and the frequency is free text so that missing or
/// unrecognized values surface as validation messages rather than decoding
/// failures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BondForm {
    /// Face value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_value: Option<f64>,
    /// Annual coupon rate in percentage points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_coupon_rate: Option<f64>,
    /// Market price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_price: Option<f64>,
    /// Years to maturity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_to_maturity: Option<f64>,
    /// Coupon frequency wire name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_frequency: Option<String>,
}

impl BondForm {
    /// Validates the form, returning every failing field at once.
    pub fn validate(&self) -> Result<BondInputs, ValidationErrors> {
        validation::validate_form(self)
    }
}

impl From<BondInputs> for BondForm {
    fn from(inputs: BondInputs) -> Self {
        Self {
            face_value: Some(inputs.face_value),
            annual_coupon_rate: Some(inputs.annual_coupon_rate),
            market_price: Some(inputs.market_price),
            years_to_maturity: Some(inputs.years_to_maturity),
            coupon_frequency: Some(inputs.coupon_frequency.as_str().to_string()),
        }
    }
}

/// Default values shown in a fresh form.
#[derive(Debug, Clone, Copy)]
pub struct BondDefaults;

impl BondDefaults {
    /// Default face value.
    pub const FACE_VALUE: f64 = 1000.0;
    /// Default annual coupon rate (percent).
    pub const ANNUAL_COUPON_RATE: f64 = 5.0;
    /// Default market price.
    pub const MARKET_PRICE: f64 = 950.0;
    /// Default years to maturity.
    pub const YEARS_TO_MATURITY: f64 = 5.0;
    /// Default coupon frequency.
    pub const COUPON_FREQUENCY: CouponFrequency = CouponFrequency::SemiAnnual;

    /// Default inputs.
    #[must_use]
    pub fn inputs() -> BondInputs {
        BondInputs {
            face_value: Self::FACE_VALUE,
            annual_coupon_rate: Self::ANNUAL_COUPON_RATE,
            market_price: Self::MARKET_PRICE,
            years_to_maturity: Self::YEARS_TO_MATURITY,
            coupon_frequency: Self::COUPON_FREQUENCY,
        }
    }

    /// Default form.
    #[must_use]
    pub fn form() -> BondForm {
        BondForm::from(Self::inputs())
    }
}
