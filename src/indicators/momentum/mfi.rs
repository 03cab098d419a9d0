//! MFI (Money Flow Index) indicator

use crate::common::math;
use crate::indicators::error::IndicatorError;
use crate::indicators::momentum::rsi::rsi_from_averages;
use crate::models::indicators::{Candle, MfiIndicator};

/// Calculate MFI indicator
///
/// Money flow = typical price * volume. Flow counts as positive when the typical
/// price rose against the prior bar, negative when it fell, and is dropped when
/// unchanged. MFI = 100 - 100 / (1 + positive / negative), 100 when nothing fell.
pub fn calculate_mfi(candles: &[Candle], period: u32) -> Result<MfiIndicator, IndicatorError> {
    if candles.len() < 2 {
        return Err(IndicatorError::insufficient(2, candles.len()));
    }

    let mut positive = Vec::with_capacity(candles.len() - 1);
    let mut negative = Vec::with_capacity(candles.len() - 1);

    for pair in candles.windows(2) {
        let prev_tp = pair[0].typical_price();
        let tp = pair[1].typical_price();
        let flow = tp * pair[1].volume;

        if tp > prev_tp {
            positive.push(flow);
            negative.push(0.0);
        } else if tp < prev_tp {
            positive.push(0.0);
            negative.push(flow);
        } else {
            positive.push(0.0);
            negative.push(0.0);
        }
    }

    let pos_sum = math::rolling_sum(&positive, period as usize)?;
    let neg_sum = math::rolling_sum(&negative, period as usize)?;

    Ok(MfiIndicator {
        value: rsi_from_averages(pos_sum, neg_sum),
        period,
    })
}

/// Calculate MFI with default period (14)
pub fn calculate_mfi_default(candles: &[Candle]) -> Result<MfiIndicator, IndicatorError> {
    calculate_mfi(candles, 14)
}
