//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::indicators::error::IndicatorError;
use crate::models::indicators::{Candle, MacdIndicator};

/// Calculate MACD indicator
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of the MACD series
/// Histogram = MACD - Signal
///
/// Both EMAs are seeded with the first close, so the MACD series is aligned with
/// the candles from index 0.
pub fn calculate_macd(
    candles: &[Candle],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> Result<MacdIndicator, IndicatorError> {
    if candles.len() < 2 {
        return Err(IndicatorError::insufficient(2, candles.len()));
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let fast_ema = math::ema(&closes, fast_period as usize)?;
    let slow_ema = math::ema(&closes, slow_period as usize)?;

    let macd_values: Vec<f64> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(fast, slow)| fast - slow)
        .collect();
    let signal_values = math::ema(&macd_values, signal_period as usize)?;

    let (Some(&macd_line), Some(&signal_line)) = (macd_values.last(), signal_values.last())
    else {
        return Err(IndicatorError::insufficient(2, candles.len()));
    };

    Ok(MacdIndicator {
        macd: macd_line,
        signal: signal_line,
        histogram: macd_line - signal_line,
        period: (fast_period, slow_period, signal_period),
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(candles: &[Candle]) -> Result<MacdIndicator, IndicatorError> {
    calculate_macd(candles, 12, 26, 9)
}
