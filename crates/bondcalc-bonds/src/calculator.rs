//! End-to-end bond calculation.
//!
//! [`BondCalculator`] validates the inputs, generates the coupon schedule,
//! solves for the yield, classifies the price and assembles the
//! [`BondCalculationResponse`].

use chrono::NaiveDate;

use bondcalc_core::{BondCalculationResponse, BondInputs, CashFlowScheduleItem};
use bondcalc_math::solvers::SolverConfig;

use crate::cashflows::generate_schedule;
use crate::error::BondResult;
use crate::pricing::{classify, current_yield, YieldResult, YieldSolver};

/// Stateless bond calculator.
///
/// Holds only the yield solver configuration, so it is cheap to clone and
/// safe to share between request handlers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BondCalculator {
    solver: YieldSolver,
}

impl BondCalculator {
    /// Creates a calculator with the default solver settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with an explicit solver configuration.
    #[must_use]
    pub fn with_solver_config(config: SolverConfig) -> Self {
        Self {
            solver: YieldSolver::with_config(config),
        }
    }

    /// The yield solver in use.
    #[must_use]
    pub fn solver(&self) -> &YieldSolver {
        &self.solver
    }

    /// Calculates yields, classification and schedule for a bond issued on
    /// `issue_date`.
    ///
    /// Inputs are checked against the shared validation rules first.
    pub fn calculate(
        &self,
        inputs: &BondInputs,
        issue_date: NaiveDate,
    ) -> BondResult<BondCalculationResponse> {
        inputs.validate()?;

        let schedule = generate_schedule(inputs, issue_date)?;
        let yield_result = self.solver.solve(
            &schedule,
            inputs.face_value,
            inputs.market_price,
            inputs.coupon_frequency,
        )?;

        Ok(assemble(inputs, schedule, &yield_result))
    }
}

/// Combines the pieces of a calculation into a response.
#[must_use]
pub fn assemble(
    inputs: &BondInputs,
    schedule: Vec<CashFlowScheduleItem>,
    yield_result: &YieldResult,
) -> BondCalculationResponse {
    let total_interest = schedule.iter().map(|item| item.coupon_payment).sum();

    BondCalculationResponse {
        current_yield: current_yield(inputs.annual_coupon(), inputs.market_price),
        ytm: yield_result.yield_value,
        total_interest,
        premium_or_discount: classify(inputs.market_price, inputs.face_value),
        cash_flow_schedule: schedule,
        inputs_echo: *inputs,
    }
}
