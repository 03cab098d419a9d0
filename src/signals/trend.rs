//! Golden/death cross classification and moving-average proximity

use crate::indicators::error::IndicatorError;
use crate::models::signal::{TrendAssessment, TrendLabel};

/// Percentage-point band around the 200-period average that counts as "near" a cross.
pub const NEAR_CROSS_THRESHOLD_PCT: f64 = 2.0;

/// Price within this many percent above the 50-period average is buy-zone adjacent.
pub const SMA50_PROXIMITY_PCT: f64 = 1.0;

/// Price within this many percent above the 200-period average is support adjacent.
pub const SMA200_PROXIMITY_PCT: f64 = 5.0;

/// `(sma50 - sma200) / sma200 * 100`
pub fn cross_pct_diff(sma50: f64, sma200: f64) -> Result<f64, IndicatorError> {
    if sma200 == 0.0 {
        return Err(IndicatorError::DivideByZero("trend_pct_diff"));
    }
    Ok((sma50 - sma200) / sma200 * 100.0)
}

/// Price at or above `average` by no more than `pct` percent.
pub fn within_pct_above(price: f64, average: f64, pct: f64) -> bool {
    price >= average && price <= average * (1.0 + pct / 100.0)
}

pub fn classify_trend(
    price: f64,
    sma50: f64,
    sma200: f64,
) -> Result<TrendAssessment, IndicatorError> {
    let pct_diff = cross_pct_diff(sma50, sma200)?;
    let near = pct_diff.abs() <= NEAR_CROSS_THRESHOLD_PCT;

    let label = match (sma50 < sma200, near) {
        (true, true) => TrendLabel::NearDeathCross,
        (true, false) => TrendLabel::DeathCross,
        (false, true) => TrendLabel::NearGoldenCross,
        (false, false) => TrendLabel::GoldenCross,
    };

    Ok(TrendAssessment {
        label,
        pct_diff,
        near_sma50: within_pct_above(price, sma50, SMA50_PROXIMITY_PCT),
        near_sma200: within_pct_above(price, sma200, SMA200_PROXIMITY_PCT),
    })
}
