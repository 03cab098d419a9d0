//! Evaluation pipeline: series -> snapshot -> trend/momentum/table -> confidence.

use rayon::prelude::*;
use tracing::debug;

use crate::indicators::bank::IndicatorBank;
use crate::indicators::error::IndicatorError;
use crate::models::indicators::PriceSeries;
use crate::models::signal::Evaluation;
use crate::signals::momentum::{detect_big_move, momentum_reading};
use crate::signals::scoring::score_confidence;
use crate::signals::table::build_signal_table;
use crate::signals::trend::classify_trend;

/// Bars needed for every SMA period to be computed from real data.
pub const FULL_FIDELITY_BARS: usize = 200;

pub struct SignalEngine;

impl SignalEngine {
    /// Run the full pipeline on one series. Pure: same series, same result.
    pub fn evaluate(series: &PriceSeries) -> Result<Evaluation, IndicatorError> {
        let snapshot = IndicatorBank::compute(series)?;
        let as_of = series
            .latest()
            .map(|c| c.timestamp)
            .ok_or_else(|| IndicatorError::insufficient(1, 0))?;

        if series.len() < FULL_FIDELITY_BARS {
            debug!(
                symbol = %series.symbol,
                bars = series.len(),
                "SignalEngine: evaluating below full-fidelity history of {} bars",
                FULL_FIDELITY_BARS
            );
        }

        let trend = classify_trend(snapshot.latest_close, snapshot.sma50(), snapshot.sma200())?;
        let momentum = momentum_reading(&snapshot);
        let big_move = detect_big_move(&snapshot);
        let signal_table = build_signal_table(&snapshot);
        let confidence = score_confidence(&snapshot)?;

        debug!(
            symbol = %series.symbol,
            score = confidence.score,
            label = %confidence.label,
            trend = %trend.label,
            big_move = big_move.is_some(),
            "SignalEngine: evaluation complete"
        );

        Ok(Evaluation {
            symbol: series.symbol.clone(),
            interval: series.interval.clone(),
            as_of,
            snapshot,
            trend,
            momentum,
            big_move,
            confidence,
            signal_table,
        })
    }

    /// Evaluate independent series in parallel. Results keep the input order.
    pub fn evaluate_all(series: &[PriceSeries]) -> Vec<Result<Evaluation, IndicatorError>> {
        series.par_iter().map(Self::evaluate).collect()
    }
}
