//! Sub-score categories and the fixed weights of every blend

use serde::{Deserialize, Serialize};

/// Sub-score category feeding the confidence blend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreCategory {
    Trend,
    Momentum,
    Volume,
    Volatility,
}

impl ScoreCategory {
    pub fn all() -> [ScoreCategory; 4] {
        [
            ScoreCategory::Trend,
            ScoreCategory::Momentum,
            ScoreCategory::Volume,
            ScoreCategory::Volatility,
        ]
    }
}

/// Weights of the unified confidence score
pub struct CategoryWeights;

impl CategoryWeights {
    pub const TREND: f64 = 0.2;
    pub const MOMENTUM: f64 = 0.4;
    pub const VOLUME: f64 = 0.2;
    pub const VOLATILITY: f64 = 0.2;

    /// Get weight for a category
    pub fn get(category: ScoreCategory) -> f64 {
        match category {
            ScoreCategory::Trend => Self::TREND,
            ScoreCategory::Momentum => Self::MOMENTUM,
            ScoreCategory::Volume => Self::VOLUME,
            ScoreCategory::Volatility => Self::VOLATILITY,
        }
    }

    /// Verify weights sum to 1.0
    pub fn verify() -> bool {
        (Self::TREND + Self::MOMENTUM + Self::VOLUME + Self::VOLATILITY - 1.0).abs() < 0.001
    }
}

/// Weights of the momentum detector's blend (RSI, MACD spread, MFI)
pub struct MomentumWeights;

impl MomentumWeights {
    pub const RSI: f64 = 0.4;
    pub const MACD: f64 = 0.4;
    pub const MFI: f64 = 0.2;

    pub fn verify() -> bool {
        (Self::RSI + Self::MACD + Self::MFI - 1.0).abs() < 0.001
    }
}

/// Weights of the confidence scorer's own momentum sub-score (RSI, MACD spread).
///
/// Independent from [`MomentumWeights`]: the two momentum views are reported side
/// by side and are not expected to agree.
pub struct ConfidenceMomentumWeights;

impl ConfidenceMomentumWeights {
    pub const RSI: f64 = 0.5;
    pub const MACD: f64 = 0.5;

    pub fn verify() -> bool {
        (Self::RSI + Self::MACD - 1.0).abs() < 0.001
    }
}
