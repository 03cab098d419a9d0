//! Momentum blend and the big-move composite warning

use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::{BigMoveWarning, MomentumLabel, MomentumReading, MoveDirection};
use crate::signals::categories::MomentumWeights;
use crate::signals::scoring::{clamp_unit, normalize_oscillator, sigmoid};

pub const BULLISH_MOMENTUM_MIN: f64 = 0.6;
pub const BEARISH_MOMENTUM_MAX: f64 = 0.4;

/// Bollinger bandwidth (percent) below which the bands count as squeezed.
pub const SQUEEZE_BANDWIDTH_PCT: f64 = 10.0;
/// ATR above this fraction of price counts as an elevated range.
pub const ELEVATED_ATR_RATIO: f64 = 0.03;
/// Latest volume above this multiple of the 50-bar average counts as a surge.
pub const VOLUME_SURGE_RATIO: f64 = 1.2;

/// `0.4 * rsi/100 + 0.4 * sigmoid(macd - signal) + 0.2 * mfi/100`
pub fn momentum_score(rsi: f64, macd: f64, macd_signal: f64, mfi: f64) -> f64 {
    clamp_unit(
        MomentumWeights::RSI * normalize_oscillator(rsi)
            + MomentumWeights::MACD * sigmoid(macd - macd_signal)
            + MomentumWeights::MFI * normalize_oscillator(mfi),
    )
}

pub fn momentum_label(score: f64) -> MomentumLabel {
    if score >= BULLISH_MOMENTUM_MIN {
        MomentumLabel::Bullish
    } else if score <= BEARISH_MOMENTUM_MAX {
        MomentumLabel::Bearish
    } else {
        MomentumLabel::Neutral
    }
}

pub fn momentum_reading(snapshot: &IndicatorSnapshot) -> MomentumReading {
    let score = momentum_score(
        snapshot.rsi14,
        snapshot.macd,
        snapshot.macd_signal,
        snapshot.mfi14,
    );
    MomentumReading {
        score,
        label: momentum_label(score),
    }
}

pub fn is_band_squeeze(bandwidth: f64) -> bool {
    bandwidth < SQUEEZE_BANDWIDTH_PCT
}

pub fn is_elevated_range(atr: f64, price: f64) -> bool {
    atr > price * ELEVATED_ATR_RATIO
}

pub fn is_volume_surge(volume: f64, avg_volume: f64) -> bool {
    volume > avg_volume * VOLUME_SURGE_RATIO
}

/// Warn when squeeze, elevated range and volume surge all hold at once.
pub fn detect_big_move(snapshot: &IndicatorSnapshot) -> Option<BigMoveWarning> {
    let price = snapshot.latest_close;
    let raised = is_band_squeeze(snapshot.bollinger_bandwidth)
        && is_elevated_range(snapshot.atr14, price)
        && is_volume_surge(snapshot.latest_volume, snapshot.avg_volume50);
    if !raised {
        return None;
    }

    let sma50 = snapshot.sma50();
    let direction = if snapshot.macd > snapshot.macd_signal && price > sma50 {
        MoveDirection::Bullish
    } else if snapshot.macd < snapshot.macd_signal && price < sma50 {
        MoveDirection::Bearish
    } else {
        MoveDirection::Uncertain
    };

    Some(BigMoveWarning { direction })
}
