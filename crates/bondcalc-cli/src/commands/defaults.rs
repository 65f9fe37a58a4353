//! Defaults command implementation.

use bondcalc_core::{BondDefaults, Field};

use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::output::{format_currency, print_header, print_output, KeyValue};

/// Execute the defaults command.
pub fn execute(format: OutputFormat) -> CliResult<()> {
    let inputs = BondDefaults::inputs();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&inputs)?);
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = vec![
                KeyValue::new(Field::FaceValue.label(), format_currency(inputs.face_value)),
                KeyValue::new(
                    Field::AnnualCouponRate.label(),
                    format!("{}%", inputs.annual_coupon_rate),
                ),
                KeyValue::new(Field::MarketPrice.label(), format_currency(inputs.market_price)),
                KeyValue::new(
                    Field::YearsToMaturity.label(),
                    inputs.years_to_maturity.to_string(),
                ),
                KeyValue::new(
                    Field::CouponFrequency.label(),
                    inputs.coupon_frequency.label(),
                ),
            ];
            if format == OutputFormat::Table {
                print_header("Default Bond");
            }
            print_output(&rows, format)?;
        }
    }

    Ok(())
}
