//! Environment-driven configuration for the report binary.
//!
//! Thresholds and weights of the scoring engine are constants, not configuration.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

pub const ENVIRONMENT_VAR: &str = "APP_ENV";
pub const SERIES_PATH_VAR: &str = "COINSCOPE_SERIES_PATH";
pub const SYMBOL_VAR: &str = "COINSCOPE_SYMBOL";
pub const INTERVAL_VAR: &str = "COINSCOPE_INTERVAL";
pub const OUTPUT_VAR: &str = "COINSCOPE_OUTPUT";
pub const FUNDAMENTALS_PATH_VAR: &str = "COINSCOPE_FUNDAMENTALS_PATH";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: expected one of {expected}")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("no price series given: pass a path or set {0}")]
    MissingSeriesPath(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                var: OUTPUT_VAR,
                value: value.to_string(),
                expected: "text, json",
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub environment: String,
    pub series_path: Option<PathBuf>,
    pub symbol: String,
    pub interval: String,
    pub output: OutputFormat,
    /// Optional JSON market snapshot for the fundamentals section.
    pub fundamentals_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "sandbox".to_string(),
            series_path: None,
            symbol: "BTC".to_string(),
            interval: "1w".to_string(),
            output: OutputFormat::Text,
            fundamentals_path: None,
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let output = match lookup(OUTPUT_VAR) {
            Some(value) => value.parse()?,
            None => defaults.output,
        };

        Ok(Self {
            environment: lookup(ENVIRONMENT_VAR)
                .map(|v| v.to_lowercase())
                .unwrap_or(defaults.environment),
            series_path: lookup(SERIES_PATH_VAR).map(PathBuf::from),
            symbol: lookup(SYMBOL_VAR).unwrap_or(defaults.symbol),
            interval: lookup(INTERVAL_VAR).unwrap_or(defaults.interval),
            output,
            fundamentals_path: lookup(FUNDAMENTALS_PATH_VAR).map(PathBuf::from),
        })
    }

    /// Replace the series path with a command-line override.
    pub fn with_series_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.series_path = path;
        }
        self
    }

    pub fn require_series_path(&self) -> Result<&PathBuf, ConfigError> {
        self.series_path
            .as_ref()
            .ok_or(ConfigError::MissingSeriesPath(SERIES_PATH_VAR))
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment.as_str(), "production" | "prod")
    }
}
