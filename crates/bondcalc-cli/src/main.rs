//! Bondcalc CLI - Command-line bond yield calculator.
//!
//! # Usage
//!
//! ```bash
//! # Calculate the default bond against the API
//! bondcalc calculate
//!
//! # Calculate in-process, newest payments first
//! bondcalc calculate --local --face-value 1000 --coupon-rate 6 --market-price 1020 \
//!     --years 10 --frequency annual --order desc
//!
//! # Point at another server and keep it
//! bondcalc config set api_base_url http://bonds.internal:3000
//!
//! # Show the form defaults as JSON
//! bondcalc --format json defaults
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;
mod settings;

use cli::{Cli, Commands, OutputFormat};
use output::print_error;
use settings::Settings;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(EnvFilter::new("debug"))
            .init();
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // A broken config file must not block `config reset`
    let settings = match cli.command {
        Commands::Config(_) => Settings::load().unwrap_or_default(),
        _ => Settings::load()?,
    };

    // Output format: flag, then saved default, then table
    let format = match cli.format {
        Some(format) => format,
        None => settings.default_format()?.unwrap_or(OutputFormat::Table),
    };

    match cli.command {
        Commands::Calculate(args) => commands::calculate::execute(args, format, &settings).await?,
        Commands::Config(args) => commands::config::execute(args, format)?,
        Commands::Defaults => commands::defaults::execute(format)?,
    }

    Ok(())
}
