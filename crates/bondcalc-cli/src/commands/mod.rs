//! CLI command implementations.

pub mod calculate;
pub mod config;
pub mod defaults;

pub use calculate::CalculateArgs;
pub use config::ConfigArgs;

use chrono::NaiveDate;

use crate::error::{CliError, CliResult};

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| CliError::InvalidDate(s.to_string()))
}
