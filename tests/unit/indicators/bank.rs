//! Unit tests for the indicator bank

use crate::test_utils::{
    candles_from_closes, create_uptrend_candles, create_wavy_candles, series,
};
use approx::assert_relative_eq;
use coinscope::indicators::trend::calculate_sma;
use coinscope::indicators::IndicatorBank;
use coinscope::{IndicatorError, SignalEngine};

#[test]
fn test_full_history_snapshot() {
    let candles = create_uptrend_candles(260);
    let snapshot = IndicatorBank::compute(&series(candles.clone())).unwrap();

    assert!(snapshot.substituted_periods.is_empty());
    assert_eq!(snapshot.sma.keys().copied().collect::<Vec<_>>(), vec![9, 20, 50, 200]);
    for period in [9, 20, 50, 200] {
        let expected = calculate_sma(&candles, period).unwrap().value;
        assert_relative_eq!(snapshot.sma[&period], expected);
    }
    assert!(snapshot.first_non_finite().is_none());
    assert_eq!(snapshot.latest_close, candles[259].close);
    assert_eq!(snapshot.latest_volume, candles[259].volume);
}

#[test]
fn test_short_history_substitutes_latest_close() {
    let candles = create_uptrend_candles(30);
    let snapshot = IndicatorBank::compute(&series(candles.clone())).unwrap();

    assert_eq!(snapshot.substituted_periods, vec![50, 200]);
    assert_eq!(snapshot.sma[&50], candles[29].close);
    assert_eq!(snapshot.sma[&200], candles[29].close);
    assert_ne!(snapshot.sma[&9], candles[29].close);
}

#[test]
fn test_average_volume_over_available_bars() {
    let candles = create_uptrend_candles(10);
    let snapshot = IndicatorBank::compute(&series(candles.clone())).unwrap();
    let expected = candles.iter().map(|c| c.volume).sum::<f64>() / 10.0;
    assert_relative_eq!(snapshot.avg_volume50, expected);
}

#[test]
fn test_single_bar_is_insufficient() {
    let err = IndicatorBank::compute(&series(create_uptrend_candles(1))).unwrap_err();
    assert_eq!(
        err,
        IndicatorError::InsufficientData {
            required: 2,
            actual: 1
        }
    );
}

#[test]
fn test_fields_finite_and_oscillators_bounded() {
    for seed in 0..10 {
        let snapshot = IndicatorBank::compute(&series(create_wavy_candles(260, seed))).unwrap();
        assert!(snapshot.first_non_finite().is_none());
        assert!((0.0..=100.0).contains(&snapshot.rsi14));
        assert!((0.0..=100.0).contains(&snapshot.mfi14));
        assert!(snapshot.bollinger_bandwidth >= 0.0);
        assert!(snapshot.atr14 >= 0.0);
    }
}

#[test]
fn test_recomputation_is_identical() {
    let input = series(create_wavy_candles(260, 7));
    let first = IndicatorBank::compute(&input).unwrap();
    let second = IndicatorBank::compute(&input).unwrap();
    assert_eq!(first, second);
}

/// Closes near the top of the f64 range: squaring their deviation overflows.
fn overflowing_candles() -> Vec<coinscope::models::Candle> {
    let closes: Vec<f64> = (0..210)
        .map(|i| if i % 2 == 0 { 1.0e300 } else { 1.5e300 })
        .collect();
    candles_from_closes(&closes)
}

#[test]
fn test_overflow_rejected_as_numeric_degenerate() {
    let err = IndicatorBank::compute(&series(overflowing_candles())).unwrap_err();
    assert_eq!(err, IndicatorError::NumericDegenerate("bollinger_bandwidth"));
}

#[test]
fn test_engine_propagates_numeric_degenerate() {
    let err = SignalEngine::evaluate(&series(overflowing_candles())).unwrap_err();
    assert!(matches!(err, IndicatorError::NumericDegenerate(_)));
}
