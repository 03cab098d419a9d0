use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::indicators::IndicatorSnapshot;

/// Relationship between the 50- and 200-period averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendLabel {
    GoldenCross,
    NearGoldenCross,
    DeathCross,
    NearDeathCross,
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TrendLabel::GoldenCross => "Golden Cross",
            TrendLabel::NearGoldenCross => "Near Golden Cross",
            TrendLabel::DeathCross => "Death Cross",
            TrendLabel::NearDeathCross => "Near Death Cross",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAssessment {
    pub label: TrendLabel,
    /// `(sma50 - sma200) / sma200 * 100`
    pub pct_diff: f64,
    /// Price sits within 1% above the 50-period average.
    pub near_sma50: bool,
    /// Price sits within 5% above the 200-period average.
    pub near_sma200: bool,
}

impl TrendAssessment {
    /// Advisory text for the proximity checks. No numeric weight anywhere.
    pub fn advisories(&self) -> Vec<&'static str> {
        let mut notes = Vec::new();
        if self.near_sma50 {
            notes.push("Price near 50-period average: buy zone adjacent");
        }
        if self.near_sma200 {
            notes.push("Price near 200-period average: strong support adjacent");
        }
        notes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MomentumLabel {
    Bullish,
    Bearish,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentumReading {
    pub score: f64,
    pub label: MomentumLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDirection {
    Bullish,
    Bearish,
    Uncertain,
}

/// Raised when a band squeeze, elevated range and volume surge coincide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BigMoveWarning {
    pub direction: MoveDirection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub trend: f64,
    pub momentum: f64,
    pub volume: f64,
    pub volatility: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLabel {
    StronglyBullish,
    Bullish,
    Neutral,
    Bearish,
    StronglyBearish,
}

impl fmt::Display for ConfidenceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ConfidenceLabel::StronglyBullish => "Strongly Bullish",
            ConfidenceLabel::Bullish => "Bullish",
            ConfidenceLabel::Neutral => "Neutral",
            ConfidenceLabel::Bearish => "Bearish",
            ConfidenceLabel::StronglyBearish => "Strongly Bearish",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceResult {
    pub score: f64,
    pub label: ConfidenceLabel,
    pub sub_scores: SubScores,
    pub raw_indicators: IndicatorSnapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalAction {
    Buy,
    Sell,
}

impl fmt::Display for SignalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalAction::Buy => f.write_str("BUY"),
            SignalAction::Sell => f.write_str("SELL"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalRow {
    pub period_name: String,
    pub period_weeks: u32,
    pub value: f64,
    pub signal: SignalAction,
    pub timeframe_label: String,
}

/// Everything derived from one price series in one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub symbol: String,
    pub interval: String,
    pub as_of: DateTime<Utc>,
    pub snapshot: IndicatorSnapshot,
    pub trend: TrendAssessment,
    pub momentum: MomentumReading,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub big_move: Option<BigMoveWarning>,
    pub confidence: ConfidenceResult,
    pub signal_table: Vec<SignalRow>,
}
