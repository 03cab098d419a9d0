//! Bar validation boundary.
//!
//! A single bad bar fails the whole series: skipping it would shift every rolling
//! window after it.

use crate::indicators::error::IndicatorError;
use crate::models::indicators::Candle;

pub fn validate_candle(index: usize, candle: &Candle) -> Result<(), IndicatorError> {
    let prices = [
        ("open", candle.open),
        ("high", candle.high),
        ("low", candle.low),
        ("close", candle.close),
    ];
    for (name, value) in prices {
        if !value.is_finite() || value <= 0.0 {
            return Err(IndicatorError::malformed(
                index,
                format!("{} must be a positive finite price, got {}", name, value),
            ));
        }
    }

    if !candle.volume.is_finite() || candle.volume < 0.0 {
        return Err(IndicatorError::malformed(
            index,
            format!("volume must be non-negative, got {}", candle.volume),
        ));
    }

    if candle.low > candle.high {
        return Err(IndicatorError::malformed(
            index,
            format!("low {} above high {}", candle.low, candle.high),
        ));
    }

    for (name, value) in [("open", candle.open), ("close", candle.close)] {
        if value < candle.low || value > candle.high {
            return Err(IndicatorError::malformed(
                index,
                format!(
                    "{} {} outside [{}, {}]",
                    name, value, candle.low, candle.high
                ),
            ));
        }
    }

    Ok(())
}

pub fn validate_bars(bars: &[Candle]) -> Result<(), IndicatorError> {
    for (index, candle) in bars.iter().enumerate() {
        validate_candle(index, candle)?;
        if index > 0 && candle.timestamp <= bars[index - 1].timestamp {
            return Err(IndicatorError::malformed(
                index,
                format!(
                    "timestamp {} not after previous {}",
                    candle.timestamp,
                    bars[index - 1].timestamp
                ),
            ));
        }
    }
    Ok(())
}
