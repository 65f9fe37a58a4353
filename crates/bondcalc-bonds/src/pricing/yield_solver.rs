//! Yield-to-maturity solver.
//!
//! Solves for the per-period rate `r` at which the discounted coupon
//! schedule plus the bullet principal reproduces the market price:
//!
//! ```text
//! Σ_{t=1..n} c / (1 + r)^t + F / (1 + r)^n = P
//! ```
//!
//! Newton-Raphson runs first, confined to [`MIN_PERIOD_RATE`, `MAX_PERIOD_RATE`];
//! any divergence falls back to bisection over the same range. The solved
//! rate is reported as an effective annual rate.
//!
//! # Example
//!
//! ```rust
//! use bondcalc_bonds::cashflows::generate_schedule;
//! use bondcalc_bonds::pricing::YieldSolver;
//! use bondcalc_core::BondDefaults;
//! use chrono::NaiveDate;
//!
//! let inputs = BondDefaults::inputs();
//! let issue = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
//! let schedule = generate_schedule(&inputs, issue).unwrap();
//!
//! let result = YieldSolver::new()
//!     .solve(&schedule, inputs.face_value, inputs.market_price, inputs.coupon_frequency)
//!     .unwrap();
//! println!("YTM: {:.4}%", result.yield_value * 100.0);
//! ```

use bondcalc_core::{CashFlowScheduleItem, CouponFrequency};
use bondcalc_math::solvers::{hybrid, Bracket, SolverConfig, SolverMethod};
use bondcalc_math::MathError;

use crate::error::{BondError, BondResult};

/// Lowest per-period rate the solver searches.
pub const MIN_PERIOD_RATE: f64 = -0.99;

/// Highest per-period rate the solver searches.
pub const MAX_PERIOD_RATE: f64 = 10.0;

/// Result of a yield calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldResult {
    /// Effective annual yield (as a decimal, e.g., 0.05 for 5%).
    pub yield_value: f64,
    /// Solved per-period rate.
    pub periodic_rate: f64,
    /// Number of iterations to converge.
    pub iterations: u32,
    /// Final price residual (should be near zero).
    pub residual: f64,
    /// Method that produced the root.
    pub method: SolverMethod,
}

/// Yield-to-maturity solver.
///
/// Uses Newton-Raphson with an analytic derivative and a bisection fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldSolver {
    config: SolverConfig,
}

impl Default for YieldSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YieldSolver {
    /// Creates a new yield solver with default settings.
    ///
    /// Default tolerance: 1e-10 (price units)
    /// Default max iterations: 100 (bisection gets twice that)
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Creates a solver from an explicit configuration.
    #[must_use]
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// The solver configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves for the yield that prices `schedule` at `market_price`.
    ///
    /// # Arguments
    ///
    /// * `schedule` - Coupon schedule; the final period also repays `face_value`
    /// * `face_value` - Principal repaid at maturity
    /// * `market_price` - Target price
    /// * `frequency` - Coupon frequency used to annualize the per-period rate
    pub fn solve(
        &self,
        schedule: &[CashFlowScheduleItem],
        face_value: f64,
        market_price: f64,
        frequency: CouponFrequency,
    ) -> BondResult<YieldResult> {
        if schedule.is_empty() {
            return Err(BondError::cash_flow_failed(
                "cannot solve a yield without any coupon periods",
            ));
        }

        let flows: Vec<f64> = schedule
            .iter()
            .map(|item| item.total_payment(face_value))
            .collect();

        // Overflow near the lower bound on long schedules still means "far above the price".
        let residual = |r: f64| {
            let pv = price_at_rate(&flows, r);
            if pv.is_finite() {
                pv - market_price
            } else {
                f64::MAX
            }
        };
        let derivative = |r: f64| price_derivative(&flows, r);

        let bracket = Bracket::new(MIN_PERIOD_RATE, MAX_PERIOD_RATE)
            .map_err(BondError::YieldSolverFailed)?;
        let periods_per_year = f64::from(frequency.periods_per_year());
        let annual_coupon = schedule[0].coupon_payment * periods_per_year;
        let initial_guess = current_yield(annual_coupon, market_price) / periods_per_year;

        let solved = hybrid(residual, derivative, initial_guess, bracket, &self.config).map_err(
            |err| match err {
                MathError::InvalidBracket { .. } => {
                    log::warn!(
                        "no yield reproduces price {} within [{}, {}]",
                        market_price,
                        MIN_PERIOD_RATE,
                        MAX_PERIOD_RATE
                    );
                    BondError::NoYieldInRange {
                        market_price,
                        lower: MIN_PERIOD_RATE,
                        upper: MAX_PERIOD_RATE,
                    }
                }
                other => BondError::YieldSolverFailed(other),
            },
        )?;

        log::debug!(
            "yield solved by {} in {} iterations: r = {}",
            solved.method,
            solved.iterations,
            solved.root
        );

        Ok(YieldResult {
            yield_value: annualize(solved.root, frequency),
            periodic_rate: solved.root,
            iterations: solved.iterations,
            residual: solved.residual,
            method: solved.method,
        })
    }
}

/// Present value of per-period cash flows discounted at `rate` per period.
///
/// `flows[0]` is paid at the end of period 1.
#[must_use]
pub fn price_at_rate(flows: &[f64], rate: f64) -> f64 {
    let factor = 1.0 + rate;
    flows
        .iter()
        .zip(1..)
        .map(|(cf, t)| cf / factor.powi(t))
        .sum()
}

/// Derivative of [`price_at_rate`] with respect to the per-period rate.
#[must_use]
pub fn price_derivative(flows: &[f64], rate: f64) -> f64 {
    let factor = 1.0 + rate;
    flows
        .iter()
        .zip(1..)
        .map(|(cf, t)| -f64::from(t) * cf / factor.powi(t + 1))
        .sum()
}

/// Converts a per-period rate into an effective annual rate.
#[must_use]
pub fn annualize(periodic_rate: f64, frequency: CouponFrequency) -> f64 {
    match frequency.periods_per_year() {
        1 => periodic_rate,
        n => (1.0 + periodic_rate).powi(n as i32) - 1.0,
    }
}

/// Converts an effective annual rate back into a per-period rate.
#[must_use]
pub fn periodic_rate(annual_yield: f64, frequency: CouponFrequency) -> f64 {
    match frequency.periods_per_year() {
        1 => annual_yield,
        n => (1.0 + annual_yield).powf(1.0 / f64::from(n)) - 1.0,
    }
}

/// Current yield: annual coupon divided by market price.
///
/// Returns 0 for a zero price.
#[must_use]
pub fn current_yield(annual_coupon: f64, market_price: f64) -> f64 {
    if market_price == 0.0 {
        return 0.0;
    }
    annual_coupon / market_price
}
