//! Config command implementation.
//!
//! Manages the saved CLI settings.

use std::collections::BTreeMap;

use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::output::{print_header, print_info, print_output, print_success, print_warning, KeyValue};
use crate::settings::{config_path, ConfigKey, Settings};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// List available configuration keys
    List,

    /// Reset configuration to defaults
    Reset(ResetArgs),

    /// Show configuration file location
    Path,
}

/// Arguments for get subcommand.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

/// Arguments for set subcommand.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    pub value: String,
}

/// Arguments for reset subcommand.
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Reset all settings (not just one)
    #[arg(long)]
    pub all: bool,

    /// Specific key to reset (optional)
    pub key: Option<String>,
}

fn description(key: ConfigKey) -> &'static str {
    match key {
        ConfigKey::ApiBaseUrl => "Base URL of the Bondcalc API",
        ConfigKey::TimeoutSecs => "Request timeout in seconds (at least 1)",
        ConfigKey::DefaultFormat => "Default output format (table, json, csv)",
    }
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, format: OutputFormat) -> CliResult<()> {
    match args.command {
        ConfigCommand::Show => execute_show(format),
        ConfigCommand::Get(get_args) => execute_get(&get_args, format),
        ConfigCommand::Set(set_args) => execute_set(&set_args),
        ConfigCommand::List => execute_list(format),
        ConfigCommand::Reset(reset_args) => execute_reset(reset_args),
        ConfigCommand::Path => execute_path(),
    }
}

/// Show current configuration.
fn execute_show(format: OutputFormat) -> CliResult<()> {
    let settings = Settings::load()?;

    match format {
        OutputFormat::Json => {
            let output: BTreeMap<_, _> = ConfigKey::ALL
                .iter()
                .map(|key| (key.as_str(), settings.get_or_default(*key)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let rows: Vec<_> = ConfigKey::ALL
                .iter()
                .map(|key| KeyValue::new(key.as_str(), settings.get_or_default(*key)))
                .collect();
            if format == OutputFormat::Table {
                print_header("Current Configuration");
            }
            print_output(&rows, format)?;
        }
    }

    Ok(())
}

/// Get a configuration value.
fn execute_get(args: &GetArgs, format: OutputFormat) -> CliResult<()> {
    let key = ConfigKey::parse(&args.key)?;
    let value = Settings::load()?.get_or_default(key);

    match format {
        OutputFormat::Table | OutputFormat::Csv => {
            println!("{}: {}", key.as_str(), value);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "key": key.as_str(),
                "value": value
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

/// Set a configuration value.
fn execute_set(args: &SetArgs) -> CliResult<()> {
    let key = ConfigKey::parse(&args.key)?;

    let mut settings = Settings::load()?;
    settings.set(key, &args.value)?;
    settings.save()?;

    print_success(&format!("Set {} = {}", key.as_str(), settings.get_or_default(key)));
    Ok(())
}

/// List available configuration keys.
fn execute_list(format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => {
            let output: Vec<_> = ConfigKey::ALL
                .iter()
                .map(|key| {
                    serde_json::json!({
                        "key": key.as_str(),
                        "description": description(*key),
                        "default": key.default_value()
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let rows: Vec<_> = ConfigKey::ALL
                .iter()
                .map(|key| {
                    KeyValue::new(
                        key.as_str(),
                        format!("{} (default: {})", description(*key), key.default_value()),
                    )
                })
                .collect();
            if format == OutputFormat::Table {
                print_header("Available Configuration Keys");
            }
            print_output(&rows, format)?;
        }
    }

    Ok(())
}

/// Reset configuration.
fn execute_reset(args: ResetArgs) -> CliResult<()> {
    if args.all {
        Settings::default().save()?;
        print_success("Reset all configuration to defaults");
    } else if let Some(key_str) = args.key {
        let key = ConfigKey::parse(&key_str)?;
        let mut settings = Settings::load()?;
        settings.remove(key);
        settings.save()?;
        print_success(&format!(
            "Reset {} to default ({})",
            key.as_str(),
            key.default_value()
        ));
    } else {
        print_warning("Use --all to reset all settings, or specify a key to reset");
    }

    Ok(())
}

/// Show configuration file path.
fn execute_path() -> CliResult<()> {
    let path = config_path()?;
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}
