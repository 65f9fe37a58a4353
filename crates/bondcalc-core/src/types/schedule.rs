//! Cash-flow schedule entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One coupon period of a bond's cash-flow schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowScheduleItem {
    /// Period number, 1-indexed and sequential.
    pub period: u32,
    /// Payment date (serialized as `YYYY-MM-DD`).
    pub payment_date: NaiveDate,
    /// Coupon paid in this period.
    pub coupon_payment: f64,
    /// Coupons paid up to and including this period.
    pub cumulative_interest: f64,
    /// Principal outstanding after this period's payment.
    pub remaining_principal: f64,
}

impl CashFlowScheduleItem {
    /// Total cash paid in this period given the bond's face value.
    ///
    /// The final period also repays principal.
    #[must_use]
    pub fn total_payment(&self, face_value: f64) -> f64 {
        if self.remaining_principal == 0.0 {
            self.coupon_payment + face_value
        } else {
            self.coupon_payment
        }
    }
}
