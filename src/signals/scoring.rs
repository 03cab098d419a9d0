//! Score normalization and the unified confidence score

use crate::indicators::error::IndicatorError;
use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::{ConfidenceLabel, ConfidenceResult, SubScores};
use crate::signals::categories::{CategoryWeights, ConfidenceMomentumWeights, ScoreCategory};

/// Sigmoid input bound. `exp(50)` is far from overflow and already saturates to 1.0.
pub const SIGMOID_CLAMP: f64 = 50.0;

/// ATR-to-price multiplier of the volatility sub-score.
pub const VOLATILITY_SCALE: f64 = 20.0;

/// Lower bounds of the confidence ladder, evaluated top-down.
pub const STRONGLY_BULLISH_MIN: f64 = 0.70;
pub const BULLISH_MIN: f64 = 0.55;
pub const NEUTRAL_MIN: f64 = 0.45;
pub const BEARISH_MIN: f64 = 0.30;

/// Logistic function with its input clamped to `[-50, 50]`.
pub fn sigmoid(x: f64) -> f64 {
    let x = x.clamp(-SIGMOID_CLAMP, SIGMOID_CLAMP);
    1.0 / (1.0 + (-x).exp())
}

/// Clamp a value to the unit interval
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Normalize an oscillator (RSI, MFI) from 0..100 to 0..1
pub fn normalize_oscillator(value: f64) -> f64 {
    clamp_unit(value / 100.0)
}

/// `clamp((sma50 - sma200) / sma200 + 0.5)`
pub fn trend_score(sma50: f64, sma200: f64) -> Result<f64, IndicatorError> {
    if sma200 == 0.0 {
        return Err(IndicatorError::DivideByZero("trend_score"));
    }
    Ok(clamp_unit((sma50 - sma200) / sma200 + 0.5))
}

/// Momentum sub-score of the confidence blend: RSI and MACD spread only.
pub fn confidence_momentum_score(rsi: f64, macd: f64, macd_signal: f64) -> f64 {
    clamp_unit(
        ConfidenceMomentumWeights::RSI * normalize_oscillator(rsi)
            + ConfidenceMomentumWeights::MACD * sigmoid(macd - macd_signal),
    )
}

pub fn volume_score(mfi: f64) -> f64 {
    normalize_oscillator(mfi)
}

/// `clamp(atr / price * 20)`
pub fn volatility_score(atr: f64, price: f64) -> Result<f64, IndicatorError> {
    if price == 0.0 {
        return Err(IndicatorError::DivideByZero("volatility_score"));
    }
    Ok(clamp_unit(atr / price * VOLATILITY_SCALE))
}

pub fn sub_scores(snapshot: &IndicatorSnapshot) -> Result<SubScores, IndicatorError> {
    Ok(SubScores {
        trend: trend_score(snapshot.sma50(), snapshot.sma200())?,
        momentum: confidence_momentum_score(snapshot.rsi14, snapshot.macd, snapshot.macd_signal),
        volume: volume_score(snapshot.mfi14),
        volatility: volatility_score(snapshot.atr14, snapshot.latest_close)?,
    })
}

/// Weighted sum of the four sub-scores
pub fn weighted_score(scores: &SubScores) -> f64 {
    let total: f64 = ScoreCategory::all()
        .into_iter()
        .map(|category| {
            let score = match category {
                ScoreCategory::Trend => scores.trend,
                ScoreCategory::Momentum => scores.momentum,
                ScoreCategory::Volume => scores.volume,
                ScoreCategory::Volatility => scores.volatility,
            };
            score * CategoryWeights::get(category)
        })
        .sum();
    clamp_unit(total)
}

/// Map a score onto the qualitative ladder
pub fn confidence_label(score: f64) -> ConfidenceLabel {
    if score >= STRONGLY_BULLISH_MIN {
        ConfidenceLabel::StronglyBullish
    } else if score >= BULLISH_MIN {
        ConfidenceLabel::Bullish
    } else if score >= NEUTRAL_MIN {
        ConfidenceLabel::Neutral
    } else if score >= BEARISH_MIN {
        ConfidenceLabel::Bearish
    } else {
        ConfidenceLabel::StronglyBearish
    }
}

/// Blend trend, momentum, volume and volatility into one 0..1 confidence score
pub fn score_confidence(snapshot: &IndicatorSnapshot) -> Result<ConfidenceResult, IndicatorError> {
    let sub_scores = sub_scores(snapshot)?;
    let score = weighted_score(&sub_scores);
    if !score.is_finite() {
        return Err(IndicatorError::NumericDegenerate("confidence_score"));
    }

    Ok(ConfidenceResult {
        score,
        label: confidence_label(score),
        sub_scores,
        raw_indicators: snapshot.clone(),
    })
}
