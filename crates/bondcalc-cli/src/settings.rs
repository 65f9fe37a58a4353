//! Persisted CLI configuration.
//!
//! Stored as JSON in `<config dir>/bondcalc/config.json`, or wherever
//! `BONDCALC_CONFIG` points.

use std::path::PathBuf;
use std::time::Duration;

use bondcalc_client::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "BONDCALC_CONFIG";

/// CLI configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// Base URL of the Bondcalc API
    ApiBaseUrl,
    /// Request timeout in seconds
    TimeoutSecs,
    /// Default output format
    DefaultFormat,
}

impl ConfigKey {
    /// All keys, in display order.
    pub const ALL: [ConfigKey; 3] = [
        ConfigKey::ApiBaseUrl,
        ConfigKey::TimeoutSecs,
        ConfigKey::DefaultFormat,
    ];

    /// Parses a key name, accepting short aliases.
    pub fn parse(s: &str) -> CliResult<Self> {
        match s.to_lowercase().as_str() {
            "api_base_url" | "api_url" | "url" => Ok(Self::ApiBaseUrl),
            "timeout_secs" | "timeout" => Ok(Self::TimeoutSecs),
            "default_format" | "format" => Ok(Self::DefaultFormat),
            _ => Err(CliError::Config(format!("Unknown configuration key: {s}"))),
        }
    }

    /// Canonical key name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ApiBaseUrl => "api_base_url",
            Self::TimeoutSecs => "timeout_secs",
            Self::DefaultFormat => "default_format",
        }
    }

    /// Value used when the key is not set.
    pub fn default_value(self) -> String {
        match self {
            Self::ApiBaseUrl => DEFAULT_BASE_URL.to_string(),
            Self::TimeoutSecs => DEFAULT_TIMEOUT_SECS.to_string(),
            Self::DefaultFormat => OutputFormat::Table.to_string(),
        }
    }
}

/// Saved settings; unset keys fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_format: Option<String>,
}

impl Settings {
    /// Loads settings from the config file, or defaults if it does not exist.
    pub fn load() -> CliResult<Self> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        serde_json::from_str(&content)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))
    }

    /// Writes settings to the config file.
    pub fn save(&self) -> CliResult<()> {
        let path = config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Saved value of a key.
    pub fn get(&self, key: ConfigKey) -> Option<String> {
        match key {
            ConfigKey::ApiBaseUrl => self.api_base_url.clone(),
            ConfigKey::TimeoutSecs => self.timeout_secs.map(|t| t.to_string()),
            ConfigKey::DefaultFormat => self.default_format.clone(),
        }
    }

    /// Saved value of a key, or its default.
    pub fn get_or_default(&self, key: ConfigKey) -> String {
        self.get(key).unwrap_or_else(|| key.default_value())
    }

    /// Validates and stores a value.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> CliResult<()> {
        let value = value.trim();
        match key {
            ConfigKey::ApiBaseUrl => {
                ClientConfig::new(value)
                    .url("/")
                    .map_err(|e| CliError::Config(e.to_string()))?;
                self.api_base_url = Some(value.to_string());
            }
            ConfigKey::TimeoutSecs => {
                let secs: u64 = value.parse().map_err(|_| {
                    CliError::Config(format!(
                        "Invalid timeout: {value}. Must be a whole number of seconds."
                    ))
                })?;
                if secs == 0 {
                    return Err(CliError::Config(
                        "Invalid timeout: 0. Must be at least 1 second.".to_string(),
                    ));
                }
                self.timeout_secs = Some(secs);
            }
            ConfigKey::DefaultFormat => {
                let format: OutputFormat = value.parse().map_err(CliError::Config)?;
                self.default_format = Some(format.to_string());
            }
        }
        Ok(())
    }

    /// Clears a key back to its default.
    pub fn remove(&mut self, key: ConfigKey) {
        match key {
            ConfigKey::ApiBaseUrl => self.api_base_url = None,
            ConfigKey::TimeoutSecs => self.timeout_secs = None,
            ConfigKey::DefaultFormat => self.default_format = None,
        }
    }

    /// Saved default output format.
    pub fn default_format(&self) -> CliResult<Option<OutputFormat>> {
        self.default_format
            .as_deref()
            .map(|s| s.parse().map_err(CliError::Config))
            .transpose()
    }

    /// Client configuration: `api_url` (flag or environment) wins over the
    /// saved URL, which wins over the default.
    pub fn client_config(&self, api_url: Option<&str>) -> ClientConfig {
        let base_url = api_url
            .map(str::to_string)
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout = self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);

        ClientConfig::new(base_url).with_timeout(Duration::from_secs(timeout))
    }
}

/// Get the config file path.
pub fn config_path() -> CliResult<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| CliError::Config("Could not determine config directory".to_string()))?;
    Ok(base.join("bondcalc").join("config.json"))
}
