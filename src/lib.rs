//! Technical-indicator and composite-confidence scoring engine.
//!
//! Turns an OHLCV price history into an [`models::IndicatorSnapshot`], then derives
//! trend, momentum, big-move and confidence judgments plus a per-period signal table.

pub mod common;
pub mod config;
pub mod fundamentals;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;

pub use indicators::IndicatorError;
pub use models::{Candle, Evaluation, IndicatorSnapshot, PriceSeries};
pub use signals::engine::SignalEngine;
