//! Bollinger Bands indicator

use crate::common::math;
use crate::indicators::error::IndicatorError;
use crate::models::indicators::{BollingerBandsIndicator, Candle};

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * standard deviation)
/// Lower Band = Middle - (std_dev * standard deviation)
/// Bandwidth = (Upper - Lower) / Middle * 100
///
/// With fewer than `period` closes the bands span all available closes.
/// The deviation is the sample standard deviation.
pub fn calculate_bollinger_bands(
    candles: &[Candle],
    period: u32,
    std_dev: f64,
) -> Result<BollingerBandsIndicator, IndicatorError> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let middle = math::trailing_mean(&closes, period as usize)?;
    let std = math::rolling_std(&closes, period as usize)?;

    if middle == 0.0 {
        return Err(IndicatorError::DivideByZero("bollinger_bandwidth"));
    }

    let upper = middle + (std_dev * std);
    let lower = middle - (std_dev * std);

    Ok(BollingerBandsIndicator {
        upper,
        middle,
        lower,
        bandwidth: (upper - lower) / middle * 100.0,
        period,
        std_dev,
    })
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(
    candles: &[Candle],
) -> Result<BollingerBandsIndicator, IndicatorError> {
    calculate_bollinger_bands(candles, 20, 2.0)
}
