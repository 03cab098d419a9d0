//! Memoization of evaluations, layered outside the pure engine.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::indicators::error::IndicatorError;
use crate::models::indicators::PriceSeries;
use crate::models::signal::Evaluation;
use crate::signals::engine::SignalEngine;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub symbol: String,
    pub interval: String,
    pub as_of: DateTime<Utc>,
}

impl CacheKey {
    /// Key of a series: symbol, bar interval and last bar timestamp.
    pub fn for_series(series: &PriceSeries) -> Result<Self, IndicatorError> {
        let as_of = series
            .latest()
            .map(|c| c.timestamp)
            .ok_or_else(|| IndicatorError::insufficient(1, 0))?;
        Ok(Self {
            symbol: series.symbol.clone(),
            interval: series.interval.clone(),
            as_of,
        })
    }
}

/// Holds at most one evaluation per `(symbol, interval)`: a new bar replaces the
/// previous one. Errors are never cached, so a failed evaluation is retried.
#[derive(Default)]
pub struct EvaluationCache {
    entries: HashMap<CacheKey, Evaluation>,
    hits: u64,
    misses: u64,
}

impl EvaluationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_evaluate(&mut self, series: &PriceSeries) -> Result<Evaluation, IndicatorError> {
        let key = CacheKey::for_series(series)?;
        if let Some(evaluation) = self.entries.get(&key) {
            self.hits += 1;
            debug!(symbol = %key.symbol, as_of = %key.as_of, "EvaluationCache: hit");
            return Ok(evaluation.clone());
        }

        self.misses += 1;
        let evaluation = SignalEngine::evaluate(series)?;
        let before = self.entries.len();
        self.entries
            .retain(|k, _| k.symbol != key.symbol || k.interval != key.interval);
        if self.entries.len() < before {
            debug!(symbol = %key.symbol, as_of = %key.as_of, "EvaluationCache: replaced stale bar");
        }
        self.entries.insert(key, evaluation.clone());
        Ok(evaluation)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
