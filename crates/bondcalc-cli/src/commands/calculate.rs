//! Calculate command implementation.
//!
//! Builds a bond form from the flags, validates it with the shared rules and
//! computes it either through the API or in-process.

use bondcalc_bonds::BondCalculator;
use bondcalc_client::BondApiClient;
use bondcalc_core::{BondCalculationResponse, BondDefaults, BondForm, BondInputs, CouponFrequency};
use clap::{Args, ValueEnum};

use crate::cli::OutputFormat;
use crate::commands::parse_date;
use crate::error::CliResult;
use crate::output::{print_calculation, SortOrder};
use crate::settings::Settings;

/// Arguments for the calculate command.
#[derive(Args, Debug)]
pub struct CalculateArgs {
    /// Face (par) value
    #[arg(long, default_value_t = BondDefaults::FACE_VALUE, allow_negative_numbers = true)]
    pub face_value: f64,

    /// Annual coupon rate (as percentage, e.g., 5.0 for 5%)
    #[arg(long, default_value_t = BondDefaults::ANNUAL_COUPON_RATE, allow_negative_numbers = true)]
    pub coupon_rate: f64,

    /// Market price
    #[arg(long, default_value_t = BondDefaults::MARKET_PRICE, allow_negative_numbers = true)]
    pub market_price: f64,

    /// Years to maturity
    #[arg(long, default_value_t = BondDefaults::YEARS_TO_MATURITY, allow_negative_numbers = true)]
    pub years: f64,

    /// Coupon frequency
    #[arg(long, value_enum, default_value = "semi-annual")]
    pub frequency: FrequencyArg,

    /// Calculate in-process instead of calling the API
    #[arg(long)]
    pub local: bool,

    /// Issue date for local calculations (YYYY-MM-DD). Defaults to today.
    #[arg(long, requires = "local")]
    pub issue_date: Option<String>,

    /// Cash-flow schedule order by period
    #[arg(long, value_enum, default_value = "asc")]
    pub order: SortOrder,

    /// API base URL [default: saved api_base_url, else http://localhost:3000]
    #[arg(long, env = "BONDCALC_API_BASE_URL")]
    pub api_url: Option<String>,
}

/// Coupon frequency choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FrequencyArg {
    /// One coupon per year
    Annual,
    /// Two coupons per year
    #[value(alias = "semiAnnual")]
    SemiAnnual,
}

impl From<FrequencyArg> for CouponFrequency {
    fn from(arg: FrequencyArg) -> Self {
        match arg {
            FrequencyArg::Annual => CouponFrequency::Annual,
            FrequencyArg::SemiAnnual => CouponFrequency::SemiAnnual,
        }
    }
}

impl CalculateArgs {
    /// The raw form these flags describe.
    pub fn to_form(&self) -> BondForm {
        BondForm {
            face_value: Some(self.face_value),
            annual_coupon_rate: Some(self.coupon_rate),
            market_price: Some(self.market_price),
            years_to_maturity: Some(self.years),
            coupon_frequency: Some(CouponFrequency::from(self.frequency).as_str().to_string()),
        }
    }
}

/// Execute the calculate command.
///
/// The form is validated up front, so both modes report invalid inputs the
/// same way and a failing form never reaches the network.
pub async fn execute(args: CalculateArgs, format: OutputFormat, settings: &Settings) -> CliResult<()> {
    let inputs = args.to_form().validate()?;

    let response = if args.local {
        calculate_local(&args, &inputs)?
    } else {
        let config = settings.client_config(args.api_url.as_deref());
        tracing::debug!("calculating via {}", config.base_url);
        BondApiClient::new(config)?.calculate_bond(&inputs).await?
    };

    print_calculation(&response, format, args.order)
}

fn calculate_local(args: &CalculateArgs, inputs: &BondInputs) -> CliResult<BondCalculationResponse> {
    let issue_date = match &args.issue_date {
        Some(date) => parse_date(date)?,
        None => chrono::Utc::now().date_naive(),
    };

    Ok(BondCalculator::new().calculate(inputs, issue_date)?)
}
