//! Bondcalc API Server binary.

use std::path::PathBuf;

use anyhow::Context;
use bondcalc_api::{server::run_server, AppState, ServerConfig};
use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Bondcalc Bond Yield Calculator REST API Server
#[derive(Parser, Debug)]
#[command(name = "bondcalc-api-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Host address to bind to [default: 127.0.0.1]
    #[arg(short = 'H', long, env = "BONDCALC_HOST")]
    host: Option<String>,

    /// Port to listen on [default: 3000]
    #[arg(short, long, env = "BONDCALC_PORT")]
    port: Option<u16>,

    /// Pin the calculation date (YYYY-MM-DD) instead of using today
    #[arg(long, env = "BONDCALC_VALUATION_DATE")]
    valuation_date: Option<NaiveDate>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let default_filter = if args.verbose {
        "debug,tower_http=debug"
    } else {
        "info,tower_http=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Bondcalc API Server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = match &args.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path.display());
            ServerConfig::from_file(path)
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        None => ServerConfig::default(),
    }
    .with_overrides(args.host, args.port, args.valuation_date);

    run_server(AppState::new(config)).await
}
