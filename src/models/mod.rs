//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod signal;

pub use indicators::{
    AtrIndicator, BollingerBandsIndicator, Candle, IndicatorSnapshot, MacdIndicator,
    MfiIndicator, PriceSeries, RsiIndicator, SmaIndicator,
};
pub use signal::{
    BigMoveWarning, ConfidenceLabel, ConfidenceResult, Evaluation, MomentumLabel,
    MomentumReading, MoveDirection, SignalAction, SignalRow, SubScores, TrendAssessment,
    TrendLabel,
};
