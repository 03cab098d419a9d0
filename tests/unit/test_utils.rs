//! Shared candle and snapshot fixtures

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use coinscope::models::{Candle, IndicatorSnapshot, PriceSeries};
use std::collections::BTreeMap;

pub fn week(i: usize) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 1, 6, 0, 0, 0).unwrap() + Duration::weeks(i as i64)
}

/// Candles with the given closes, a 1% range around each close and constant volume.
pub fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Candle::new(close, close * 1.01, close * 0.99, close, 1000.0, week(i)))
        .collect()
}

/// Candles whose open, high, low and close all equal the given close.
pub fn flat_candles(closes: &[f64], volumes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .zip(volumes)
        .enumerate()
        .map(|(i, (&close, &volume))| Candle::new(close, close, close, close, volume, week(i)))
        .collect()
}

pub fn create_uptrend_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let base = 100.0 + (i as f64 * 0.5);
            Candle::new(
                base,
                base + 0.3,
                base - 0.2,
                base + 0.1,
                1000.0 + (i as f64 * 10.0),
                week(i),
            )
        })
        .collect()
}

pub fn create_downtrend_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let base = 300.0 - (i as f64 * 0.8);
            Candle::new(
                base,
                base + 0.2,
                base - 0.3,
                base - 0.1,
                1000.0 + (i as f64 * 10.0),
                week(i),
            )
        })
        .collect()
}

/// Deterministic noisy walk around 100 (linear congruential noise).
pub fn create_wavy_candles(count: usize, seed: u64) -> Vec<Candle> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 33) as f64) / ((1u64 << 31) as f64)
    };

    let mut close: f64 = 100.0;
    (0..count)
        .map(|i| {
            let open = close;
            close = (close * (1.0 + (next() - 0.5) * 0.1)).max(1.0);
            let high = open.max(close) * (1.0 + next() * 0.02);
            let low = open.min(close) * (1.0 - next() * 0.02);
            let volume = 500.0 + next() * 1000.0;
            Candle::new(open, high, low, close, volume, week(i))
        })
        .collect()
}

pub fn series(candles: Vec<Candle>) -> PriceSeries {
    PriceSeries::new(candles).unwrap().with_symbol("BTC")
}

/// Snapshot at price 100 where every sub-score sits at its midpoint.
pub fn neutral_snapshot() -> IndicatorSnapshot {
    let sma: BTreeMap<u32, f64> = [(9, 100.0), (20, 100.0), (50, 100.0), (200, 100.0)]
        .into_iter()
        .collect();
    IndicatorSnapshot {
        sma,
        substituted_periods: Vec::new(),
        bollinger_bandwidth: 20.0,
        atr14: 2.5,
        rsi14: 50.0,
        mfi14: 50.0,
        macd: 0.0,
        macd_signal: 0.0,
        latest_close: 100.0,
        latest_volume: 1000.0,
        avg_volume50: 1000.0,
    }
}

/// Snapshot that passes all three big-move gates with a bullish bias.
pub fn big_move_snapshot() -> IndicatorSnapshot {
    let mut snapshot = neutral_snapshot();
    snapshot.bollinger_bandwidth = 9.0;
    snapshot.atr14 = 4.0;
    snapshot.latest_volume = 130.0;
    snapshot.avg_volume50 = 100.0;
    snapshot.macd = 1.0;
    snapshot.macd_signal = 0.0;
    snapshot.sma.insert(50, 95.0);
    snapshot
}
