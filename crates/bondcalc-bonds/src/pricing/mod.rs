//! Bond pricing calculations.
//!
//! This module provides:
//! - [`YieldSolver`]: yield-to-maturity solver (Newton-Raphson with bisection fallback)
//! - [`YieldResult`]: result of a yield solve
//! - [`current_yield`]: current yield calculation
//! - [`classify`]: premium / discount / par classification

mod classifier;
mod yield_solver;

pub use classifier::{classify, status_description};
pub use yield_solver::{
    annualize, current_yield, periodic_rate, price_at_rate, price_derivative, YieldResult,
    YieldSolver, MAX_PERIOD_RATE, MIN_PERIOD_RATE,
};
