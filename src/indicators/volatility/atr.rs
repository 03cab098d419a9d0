//! ATR (Average True Range) indicator

use crate::common::math;
use crate::indicators::error::IndicatorError;
use crate::models::indicators::{AtrIndicator, Candle};

/// True range of every bar after the first.
pub fn true_ranges(candles: &[Candle]) -> Vec<f64> {
    candles
        .windows(2)
        .map(|pair| math::true_range(pair[1].high, pair[1].low, pair[0].close))
        .collect()
}

/// Calculate ATR (Average True Range)
///
/// Simple average of the last `period` true ranges, or of every true range when
/// fewer exist. Needs at least two candles.
pub fn calculate_atr(candles: &[Candle], period: u32) -> Result<AtrIndicator, IndicatorError> {
    if candles.len() < 2 {
        return Err(IndicatorError::insufficient(2, candles.len()));
    }

    let tr_values = true_ranges(candles);
    let value = math::trailing_mean(&tr_values, period as usize)?;

    Ok(AtrIndicator { value, period })
}

/// Calculate ATR with default period (14)
pub fn calculate_atr_default(candles: &[Candle]) -> Result<AtrIndicator, IndicatorError> {
    calculate_atr(candles, 14)
}
