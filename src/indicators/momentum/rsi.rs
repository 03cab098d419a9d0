//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::indicators::error::IndicatorError;
use crate::models::indicators::{Candle, RsiIndicator};

/// Calculate RSI indicator
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Averages are simple means over the last `period` close-to-close changes (all
/// changes when fewer exist). A window without losses reads as 100.
pub fn calculate_rsi(candles: &[Candle], period: u32) -> Result<RsiIndicator, IndicatorError> {
    if candles.len() < 2 {
        return Err(IndicatorError::insufficient(2, candles.len()));
    }

    let mut gains = Vec::with_capacity(candles.len() - 1);
    let mut losses = Vec::with_capacity(candles.len() - 1);

    for pair in candles.windows(2) {
        let change = pair[1].close - pair[0].close;
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(change.abs());
        }
    }

    let avg_gain = math::trailing_mean(&gains, period as usize)?;
    let avg_loss = math::trailing_mean(&losses, period as usize)?;

    Ok(RsiIndicator {
        value: rsi_from_averages(avg_gain, avg_loss),
        period,
    })
}

/// `100 - 100 / (1 + gain / loss)`, pinned to 100 when there is no loss.
pub fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(candles: &[Candle]) -> Result<RsiIndicator, IndicatorError> {
    calculate_rsi(candles, 14)
}
