//! IndicatorBank: every indicator the scorers need, computed in one pass.

use std::collections::BTreeMap;

use tracing::debug;

use crate::indicators::error::IndicatorError;
use crate::indicators::momentum::{calculate_macd_default, calculate_mfi_default, calculate_rsi_default};
use crate::indicators::trend::{calculate_smas, SMA_PERIODS};
use crate::indicators::volatility::{calculate_atr_default, calculate_bollinger_bands_default};
use crate::indicators::volume::average_volume;
use crate::models::indicators::{IndicatorSnapshot, PriceSeries};

/// Bars needed before ATR, RSI, MFI and MACD have a prior bar to compare against.
pub const MIN_BARS: usize = 2;

/// Volume average window used by the big-move gate.
pub const VOLUME_AVERAGE_PERIOD: u32 = 50;

pub struct IndicatorBank;

impl IndicatorBank {
    /// Compute the snapshot as of the last bar of `series`.
    ///
    /// Short histories degrade rather than fail: SMAs longer than the series fall
    /// back to the latest close, and windowed averages shrink to the data available.
    /// Fewer than [`MIN_BARS`] bars is an error.
    pub fn compute(series: &PriceSeries) -> Result<IndicatorSnapshot, IndicatorError> {
        let candles = series.bars();
        if candles.len() < MIN_BARS {
            return Err(IndicatorError::insufficient(MIN_BARS, candles.len()));
        }
        let latest = candles
            .last()
            .ok_or_else(|| IndicatorError::insufficient(MIN_BARS, 0))?;

        let mut sma = BTreeMap::new();
        let mut substituted_periods = Vec::new();
        for indicator in calculate_smas(candles, &SMA_PERIODS)? {
            if indicator.substituted {
                substituted_periods.push(indicator.period);
            }
            sma.insert(indicator.period, indicator.value);
        }
        if !substituted_periods.is_empty() {
            debug!(
                symbol = %series.symbol,
                bars = candles.len(),
                periods = ?substituted_periods,
                "IndicatorBank: history too short, latest close substituted for SMA"
            );
        }

        let bollinger = calculate_bollinger_bands_default(candles)?;
        let atr = calculate_atr_default(candles)?;
        let rsi = calculate_rsi_default(candles)?;
        let mfi = calculate_mfi_default(candles)?;
        let macd = calculate_macd_default(candles)?;
        let avg_volume50 = average_volume(candles, VOLUME_AVERAGE_PERIOD)?;

        let snapshot = IndicatorSnapshot {
            sma,
            substituted_periods,
            bollinger_bandwidth: bollinger.bandwidth,
            atr14: atr.value,
            rsi14: rsi.value,
            mfi14: mfi.value,
            macd: macd.macd,
            macd_signal: macd.signal,
            latest_close: latest.close,
            latest_volume: latest.volume,
            avg_volume50,
        };

        if let Some(field) = snapshot.first_non_finite() {
            return Err(IndicatorError::NumericDegenerate(field));
        }

        Ok(snapshot)
    }
}
