//! Output formatting utilities.

use bondcalc_bonds::pricing::status_description;
use bondcalc_core::{
    BondCalculationResponse, BondInputs, CashFlowScheduleItem, PremiumDiscountIndicator,
};
use chrono::NaiveDate;
use colored::{ColoredString, Colorize};
use rust_decimal::prelude::*;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;
use crate::error::CliResult;

/// Printed in place of an empty schedule.
pub const EMPTY_SCHEDULE_MESSAGE: &str = "Cash flow schedule will appear here after calculation";

/// Schedule ordering by period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortOrder {
    /// First payment first
    #[default]
    Asc,
    /// Last payment first
    Desc,
}

/// Formats and prints rows based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> CliResult<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }
    println!("{}", render_table(data));
    Ok(())
}

fn render_table<T: Tabled>(data: &[T]) -> String {
    Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string()
}

/// Prints data as JSON.
fn print_json<T: Serialize>(data: &[T]) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> CliResult<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Formats a decimal fraction as a percentage with two decimals (0.0526 -> "5.26%").
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Formats an amount as US dollars: `$1,234.56`, `-$0.50`.
pub fn format_currency(value: f64) -> String {
    let Some(amount) = Decimal::from_f64_retain(value) else {
        return format!("${value}");
    };
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!("{sign}${}.{cents}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a date as `Jan 5, 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Upper-cases the first character.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Status badge: green for premium, red for discount, blue for par.
pub fn status_badge(indicator: PremiumDiscountIndicator) -> ColoredString {
    let label = capitalize_first(indicator.as_str());
    match indicator {
        PremiumDiscountIndicator::Premium => label.green().bold(),
        PremiumDiscountIndicator::Discount => label.red().bold(),
        PremiumDiscountIndicator::Par => label.blue().bold(),
    }
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One row of the rendered cash-flow table.
#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct ScheduleRow {
    #[tabled(rename = "Period")]
    pub period: u32,
    #[tabled(rename = "Payment Date")]
    pub payment_date: String,
    #[tabled(rename = "Coupon Payment")]
    pub coupon_payment: String,
    #[tabled(rename = "Cumulative Interest")]
    pub cumulative_interest: String,
    #[tabled(rename = "Remaining Principal")]
    pub remaining_principal: String,
}

impl From<&CashFlowScheduleItem> for ScheduleRow {
    fn from(item: &CashFlowScheduleItem) -> Self {
        Self {
            period: item.period,
            payment_date: format_date(item.payment_date),
            coupon_payment: format_currency(item.coupon_payment),
            cumulative_interest: format_currency(item.cumulative_interest),
            remaining_principal: format_currency(item.remaining_principal),
        }
    }
}

/// Schedule entries ordered by period.
pub fn sorted_schedule(
    schedule: &[CashFlowScheduleItem],
    order: SortOrder,
) -> Vec<&CashFlowScheduleItem> {
    let mut items: Vec<_> = schedule.iter().collect();
    match order {
        SortOrder::Asc => items.sort_by_key(|item| item.period),
        SortOrder::Desc => items.sort_by_key(|item| std::cmp::Reverse(item.period)),
    }
    items
}

/// "Showing N payment period(s)".
pub fn schedule_footer(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Showing {count} payment period{plural}")
}

/// Headline metrics of a calculation.
pub fn summary_rows(response: &BondCalculationResponse) -> Vec<KeyValue> {
    vec![
        KeyValue::new("Current Yield", format_percentage(response.current_yield)),
        KeyValue::new(
            "Yield to Maturity (YTM)",
            format!("{} (Effective annual rate)", format_percentage(response.ytm)),
        ),
        KeyValue::new("Total Interest", format_currency(response.total_interest)),
    ]
}

/// Echo of the inputs that produced a calculation.
pub fn input_rows(inputs: &BondInputs) -> Vec<KeyValue> {
    vec![
        KeyValue::new("Face Value", format_currency(inputs.face_value)),
        KeyValue::new("Market Price", format_currency(inputs.market_price)),
        KeyValue::new("Coupon Rate", format!("{}%", inputs.annual_coupon_rate)),
        KeyValue::new("Maturity", format!("{} years", inputs.years_to_maturity)),
        KeyValue::new("Coupon Frequency", inputs.coupon_frequency.label()),
    ]
}

/// Renders the cash-flow table with its footer, or the empty-schedule hint.
pub fn render_schedule(schedule: &[CashFlowScheduleItem], order: SortOrder) -> String {
    if schedule.is_empty() {
        return EMPTY_SCHEDULE_MESSAGE.to_string();
    }

    let rows: Vec<ScheduleRow> = sorted_schedule(schedule, order)
        .into_iter()
        .map(ScheduleRow::from)
        .collect();
    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(2..)).with(Alignment::right()))
        .to_string();

    format!("{table}\n{}", schedule_footer(schedule.len()))
}

/// Prints a full calculation in the requested format.
pub fn print_calculation(
    response: &BondCalculationResponse,
    format: OutputFormat,
    order: SortOrder,
) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            print_header("Calculation Results");
            println!("{}", render_table(&summary_rows(response)));
            println!(
                "Bond Status: {}  {}",
                status_badge(response.premium_or_discount),
                status_description(response.premium_or_discount).dimmed()
            );

            print_header("Input Summary");
            println!("{}", render_table(&input_rows(&response.inputs_echo)));

            print_header("Cash Flow Schedule");
            println!("{}", render_schedule(&response.cash_flow_schedule, order));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(response)?);
        }
        OutputFormat::Csv => {
            let rows = sorted_schedule(&response.cash_flow_schedule, order);
            print_csv(&rows)?;
        }
    }
    Ok(())
}
