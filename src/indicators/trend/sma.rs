//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::indicators::error::IndicatorError;
use crate::models::indicators::{Candle, SmaIndicator};

/// Moving-average periods reported by the snapshot and the signal table.
pub const SMA_PERIODS: [u32; 4] = [9, 20, 50, 200];

/// Calculate SMA of closes for a specific period
pub fn calculate_sma(candles: &[Candle], period: u32) -> Result<SmaIndicator, IndicatorError> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let value = math::sma(&closes, period as usize)?;

    Ok(SmaIndicator {
        value,
        period,
        substituted: false,
    })
}

/// SMA that falls back to the latest close when the history is shorter than `period`.
///
/// The latest close is a neutral placeholder: price-vs-average comparisons against it
/// never read as above the average.
pub fn calculate_sma_or_latest(
    candles: &[Candle],
    period: u32,
) -> Result<SmaIndicator, IndicatorError> {
    let latest = candles
        .last()
        .ok_or_else(|| IndicatorError::insufficient(1, 0))?;

    match calculate_sma(candles, period) {
        Ok(sma) => Ok(sma),
        Err(IndicatorError::InsufficientData { .. }) => Ok(SmaIndicator {
            value: latest.close,
            period,
            substituted: true,
        }),
        Err(e) => Err(e),
    }
}

/// Calculate multiple SMAs at once, substituting short periods
pub fn calculate_smas(
    candles: &[Candle],
    periods: &[u32],
) -> Result<Vec<SmaIndicator>, IndicatorError> {
    periods
        .iter()
        .map(|&period| calculate_sma_or_latest(candles, period))
        .collect()
}

