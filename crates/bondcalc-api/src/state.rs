//! Application state.

use std::sync::Arc;

use bondcalc_bonds::BondCalculator;
use chrono::{NaiveDate, Utc};

use crate::config::ServerConfig;

/// Application state shared across handlers.
///
/// Immutable after startup, so handlers share it without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,

    /// Bond calculator built from the solver settings.
    pub calculator: BondCalculator,
}

impl AppState {
    /// Create state from a configuration.
    pub fn new(config: ServerConfig) -> Self {
        let calculator = BondCalculator::with_solver_config(config.solver.into());
        Self {
            config: Arc::new(config),
            calculator,
        }
    }

    /// Date the bond is treated as issued on: the pinned valuation date, or
    /// today in UTC.
    pub fn calculation_date(&self) -> NaiveDate {
        self.config
            .valuation_date
            .unwrap_or_else(|| Utc::now().date_naive())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}
