//! Volume indicators

use crate::common::math;
use crate::indicators::error::IndicatorError;
use crate::models::indicators::Candle;

/// Average volume over the last `period` bars (all bars when fewer exist).
pub fn average_volume(candles: &[Candle], period: u32) -> Result<f64, IndicatorError> {
    let volumes: Vec<f64> = candles.iter().map(|c| c.volume).collect();
    math::trailing_mean(&volumes, period as usize)
}
