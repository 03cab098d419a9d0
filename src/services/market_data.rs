//! Price series sources.
//!
//! The engine only consumes [`PriceSeries`]; anything that can produce one can feed it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::indicators::error::IndicatorError;
use crate::models::indicators::{Candle, PriceSeries};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse price series: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid price series: {0}")]
    Invalid(#[from] IndicatorError),

    #[error("no series for {symbol} at {interval}")]
    NotFound { symbol: String, interval: String },
}

pub trait PriceSeriesSource {
    /// Load the full bar history for `symbol` at `interval`.
    fn load_series(&self, symbol: &str, interval: &str) -> Result<PriceSeries, SourceError>;
}

/// On-disk layout of a bar history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    pub bars: Vec<Candle>,
}

impl SeriesFile {
    /// Validate the bars; the file's own symbol/interval win over the fallbacks.
    pub fn into_series(self, symbol: &str, interval: &str) -> Result<PriceSeries, SourceError> {
        let series = PriceSeries::new(self.bars)?
            .with_symbol(self.symbol.unwrap_or_else(|| symbol.to_string()))
            .with_interval(self.interval.unwrap_or_else(|| interval.to_string()));
        Ok(series)
    }
}

pub fn parse_series(json: &str, symbol: &str, interval: &str) -> Result<PriceSeries, SourceError> {
    let file: SeriesFile = serde_json::from_str(json)?;
    file.into_series(symbol, interval)
}

/// Reads a single JSON bar file regardless of the symbol asked for.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PriceSeriesSource for JsonFileSource {
    fn load_series(&self, symbol: &str, interval: &str) -> Result<PriceSeries, SourceError> {
        let json = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let series = parse_series(&json, symbol, interval)?;
        debug!(
            path = %self.path.display(),
            symbol = %series.symbol,
            bars = series.len(),
            "JsonFileSource: loaded price series"
        );
        Ok(series)
    }
}

/// Serves series held in memory, keyed by symbol.
#[derive(Default)]
pub struct InMemorySource {
    series: Vec<PriceSeries>,
}

impl InMemorySource {
    pub fn new(series: Vec<PriceSeries>) -> Self {
        Self { series }
    }
}

impl PriceSeriesSource for InMemorySource {
    fn load_series(&self, symbol: &str, interval: &str) -> Result<PriceSeries, SourceError> {
        self.series
            .iter()
            .find(|s| s.symbol.eq_ignore_ascii_case(symbol) && s.interval == interval)
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                symbol: symbol.to_string(),
                interval: interval.to_string(),
            })
    }
}
