use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::indicators::error::IndicatorError;
use crate::indicators::validation::validate_bars;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp,
        }
    }

    /// `(high + low + close) / 3`
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }
}

/// Validated, read-only OHLCV history.
///
/// Construction runs the bar validation, so every `PriceSeries` in circulation
/// already satisfies the OHLC ordering and timestamp invariants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    pub symbol: String,
    pub interval: String,
    bars: Vec<Candle>,
}

impl PriceSeries {
    pub fn new(bars: Vec<Candle>) -> Result<Self, IndicatorError> {
        validate_bars(&bars)?;
        Ok(Self {
            symbol: "UNKNOWN".to_string(),
            interval: "1w".to_string(),
            bars,
        })
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    pub fn with_interval(mut self, interval: impl Into<String>) -> Self {
        self.interval = interval.into();
        self
    }

    pub fn bars(&self) -> &[Candle] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn latest(&self) -> Option<&Candle> {
        self.bars.last()
    }
}

/// Indicator values as of the most recent bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub sma: BTreeMap<u32, f64>,
    /// Periods whose SMA was replaced by the latest close (history too short).
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub substituted_periods: Vec<u32>,
    pub bollinger_bandwidth: f64,
    pub atr14: f64,
    pub rsi14: f64,
    pub mfi14: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub latest_close: f64,
    pub latest_volume: f64,
    pub avg_volume50: f64,
}

impl IndicatorSnapshot {
    /// SMA for `period`, or the latest close when the period was never computed.
    pub fn sma_or_close(&self, period: u32) -> f64 {
        self.sma.get(&period).copied().unwrap_or(self.latest_close)
    }

    pub fn sma50(&self) -> f64 {
        self.sma_or_close(50)
    }

    pub fn sma200(&self) -> f64 {
        self.sma_or_close(200)
    }

    pub fn macd_histogram(&self) -> f64 {
        self.macd - self.macd_signal
    }

    /// First non-finite field, if any.
    pub fn first_non_finite(&self) -> Option<&'static str> {
        if self.sma.values().any(|v| !v.is_finite()) {
            return Some("sma");
        }
        [
            ("bollinger_bandwidth", self.bollinger_bandwidth),
            ("atr14", self.atr14),
            ("rsi14", self.rsi14),
            ("mfi14", self.mfi14),
            ("macd", self.macd),
            ("macd_signal", self.macd_signal),
            ("latest_close", self.latest_close),
            ("latest_volume", self.latest_volume),
            ("avg_volume50", self.avg_volume50),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(name, _)| name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmaIndicator {
    pub value: f64,
    pub period: u32,
    /// True when the history was shorter than `period` and the latest close stands in.
    #[serde(default)]
    pub substituted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerBandsIndicator {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    /// `(upper - lower) / middle * 100`
    pub bandwidth: f64,
    pub period: u32,
    pub std_dev: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtrIndicator {
    pub value: f64,
    pub period: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: f64,
    pub period: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MfiIndicator {
    pub value: f64,
    pub period: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
    pub period: (u32, u32, u32),
}
