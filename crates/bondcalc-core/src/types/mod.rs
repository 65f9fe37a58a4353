//! Domain types for bond calculations.
//!
//! This module provides the request, schedule and response types shared by
//! the calculator, the HTTP service and its client.

mod frequency;
mod inputs;
mod response;
mod schedule;

pub use frequency::CouponFrequency;
pub use inputs::{BondDefaults, BondForm, BondInputs};
pub use response::{BondCalculationResponse, PremiumDiscountIndicator};
pub use schedule::CashFlowScheduleItem;
