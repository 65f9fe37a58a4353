//! Coupon frequency.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Coupon payment frequency.
///
/// Serialized as `"annual"` or `"semiAnnual"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum CouponFrequency {
    /// Annual payments (1 per year)
    Annual,
    /// Semi-annual payments (2 per year)
    #[default]
    SemiAnnual,
}

impl CouponFrequency {
    /// All recognized frequencies, in display order.
    pub const ALL: [CouponFrequency; 2] = [CouponFrequency::Annual, CouponFrequency::SemiAnnual];

    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CouponFrequency::Annual => 1,
            CouponFrequency::SemiAnnual => 2,
        }
    }

    /// Returns the number of months per period.
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        12 / self.periods_per_year()
    }

    /// Returns the wire name (`annual` / `semiAnnual`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CouponFrequency::Annual => "annual",
            CouponFrequency::SemiAnnual => "semiAnnual",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            CouponFrequency::Annual => "Annual",
            CouponFrequency::SemiAnnual => "Semi-Annual",
        }
    }

    /// Number of whole coupon periods for a maturity in years.
    ///
    /// Fractional period counts round half away from zero, so 2.25 years
    /// semi-annual is 5 periods and 2.2 years is 4.
    #[must_use]
    pub fn periods_for(&self, years_to_maturity: f64) -> u32 {
        let periods = (years_to_maturity * f64::from(self.periods_per_year())).round();
        if periods.is_finite() && periods > 0.0 {
            periods.min(f64::from(u32::MAX)) as u32
        } else {
            0
        }
    }
}

impl fmt::Display for CouponFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CouponFrequency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "annual" => Ok(CouponFrequency::Annual),
            "semiAnnual" => Ok(CouponFrequency::SemiAnnual),
            other => Err(CoreError::unknown_frequency(other)),
        }
    }
}
