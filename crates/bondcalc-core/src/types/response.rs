//! Calculation response types.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{BondInputs, CashFlowScheduleItem};

/// Whether a bond trades above, below or at its face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PremiumDiscountIndicator {
    /// Market price above face value.
    Premium,
    /// Market price below face value.
    Discount,
    /// Market price equal to face value.
    Par,
}

impl PremiumDiscountIndicator {
    /// Returns the wire name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PremiumDiscountIndicator::Premium => "premium",
            PremiumDiscountIndicator::Discount => "discount",
            PremiumDiscountIndicator::Par => "par",
        }
    }
}

impl fmt::Display for PremiumDiscountIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a bond calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondCalculationResponse {
    /// Annual coupon divided by market price (decimal, 0.0526 = 5.26%).
    pub current_yield: f64,
    /// Yield to maturity as an effective annual rate (decimal).
    pub ytm: f64,
    /// Sum of all coupon payments.
    pub total_interest: f64,
    /// Premium / discount / par classification.
    pub premium_or_discount: PremiumDiscountIndicator,
    /// Coupon schedule ordered by period.
    pub cash_flow_schedule: Vec<CashFlowScheduleItem>,
    /// Copy of the inputs that produced this response.
    pub inputs_echo: BondInputs,
}

impl BondCalculationResponse {
    /// Number of coupon periods in the schedule.
    #[must_use]
    pub fn periods(&self) -> usize {
        self.cash_flow_schedule.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CouponFrequency;

    #[test]
    fn test_indicator_wire_names() {
        assert_eq!(
            serde_json::to_string(&PremiumDiscountIndicator::Premium).unwrap(),
            "\"premium\""
        );
        let par: PremiumDiscountIndicator = serde_json::from_str("\"par\"").unwrap();
        assert_eq!(par, PremiumDiscountIndicator::Par);
        assert_eq!(PremiumDiscountIndicator::Discount.to_string(), "discount");
    }

    #[test]
    fn test_response_decodes_backend_payload() {
        let payload = r#"{
            "currentYield": 0.0526,
            "ytm": 0.0625,
            "totalInterest": 50,
            "premiumOrDiscount": "discount",
            "cashFlowSchedule": [
                {"period": 1, "paymentDate": "2026-10-19", "couponPayment": 25,
                 "cumulativeInterest": 25, "remainingPrincipal": 1000},
                {"period": 2, "paymentDate": "2027-04-19", "couponPayment": 25,
                 "cumulativeInterest": 50, "remainingPrincipal": 0}
            ],
            "inputsEcho": {"faceValue": 1000, "annualCouponRate": 5, "marketPrice": 950,
                           "yearsToMaturity": 1, "couponFrequency": "semiAnnual"}
        }"#;

        let response: BondCalculationResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.periods(), 2);
        assert_eq!(
            response.premium_or_discount,
            PremiumDiscountIndicator::Discount
        );
        assert_eq!(
            response.inputs_echo.coupon_frequency,
            CouponFrequency::SemiAnnual
        );
    }
}
