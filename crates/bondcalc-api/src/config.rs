//! Server configuration.

use std::path::Path;

use bondcalc_math::solvers::{SolverConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Server configuration.
///
/// Loaded from an optional TOML file; command-line flags and `BONDCALC_*`
/// environment variables override individual settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Pinned calculation date; today (UTC) when absent
    #[serde(default)]
    pub valuation_date: Option<NaiveDate>,

    /// Yield solver settings
    #[serde(default)]
    pub solver: SolverSettings,
}

/// Yield solver settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Price residual tolerance
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Newton-Raphson iteration budget
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            valuation_date: None,
            solver: SolverSettings::default(),
        }
    }
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

impl From<SolverSettings> for SolverConfig {
    fn from(settings: SolverSettings) -> Self {
        SolverConfig::new(settings.tolerance, settings.max_iterations)
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, std::io::Error> {
        toml::from_str(content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Applies settings given on the command line or in the environment.
    #[must_use]
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        valuation_date: Option<NaiveDate>,
    ) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        if valuation_date.is_some() {
            self.valuation_date = valuation_date;
        }
        self
    }

    /// `host:port` to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert!(config.valuation_date.is_none());
        assert_eq!(config.solver.max_iterations, 100);
    }

    #[test]
    fn test_partial_toml() {
        let config = ServerConfig::from_toml(
            r#"
            port = 8080
            valuation_date = "2026-01-15"

            [solver]
            tolerance = 1e-8
            "#,
        )
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.valuation_date, NaiveDate::from_ymd_opt(2026, 1, 15));
        assert_eq!(config.solver.tolerance, 1e-8);
        assert_eq!(config.solver.max_iterations, 100);
    }

    #[test]
    fn test_invalid_toml() {
        let err = ServerConfig::from_toml("port = \"not a port\"").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "host = \"0.0.0.0\"").unwrap();

        let config = ServerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let file_config = ServerConfig::from_toml("host = \"10.0.0.1\"\nport = 9000").unwrap();

        let config = file_config.clone().with_overrides(None, Some(4000), None);
        assert_eq!(config.host, "10.0.0.1");
        assert_eq!(config.port, 4000);

        let date = NaiveDate::from_ymd_opt(2030, 6, 30);
        let config = file_config.with_overrides(Some("localhost".into()), None, date);
        assert_eq!(config.bind_address(), "localhost:9000");
        assert_eq!(config.valuation_date, date);
    }

    #[test]
    fn test_solver_settings_conversion() {
        let solver: SolverConfig = SolverSettings {
            tolerance: 1e-6,
            max_iterations: 25,
        }
        .into();
        assert_eq!(solver, SolverConfig::new(1e-6, 25));
    }
}
