//! Cash flow generation for bonds.
//!
//! Bondcalc bonds are fixed-coupon bullets: a constant coupon every period
//! and the whole face value repaid with the final coupon.

mod schedule;

pub use schedule::{generate_schedule, payment_date};
