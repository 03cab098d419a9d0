//! Unit tests for momentum detection and the big-move warning

use crate::test_utils::{big_move_snapshot, neutral_snapshot};
use approx::assert_relative_eq;
use coinscope::models::{MomentumLabel, MoveDirection};
use coinscope::signals::momentum::*;

#[test]
fn test_neutral_momentum() {
    let reading = momentum_reading(&neutral_snapshot());
    assert_relative_eq!(reading.score, 0.5, epsilon = 1e-12);
    assert_eq!(reading.label, MomentumLabel::Neutral);
}

#[test]
fn test_bullish_momentum() {
    let score = momentum_score(80.0, 10_000.0, 0.0, 70.0);
    assert_relative_eq!(score, 0.86, epsilon = 1e-12);
    assert_eq!(momentum_label(score), MomentumLabel::Bullish);
}

#[test]
fn test_bearish_momentum() {
    let score = momentum_score(20.0, -10_000.0, 0.0, 30.0);
    assert_relative_eq!(score, 0.14, epsilon = 1e-9);
    assert_eq!(momentum_label(score), MomentumLabel::Bearish);
}

#[test]
fn test_momentum_label_boundaries() {
    assert_eq!(momentum_label(0.6), MomentumLabel::Bullish);
    assert_eq!(momentum_label(0.5999), MomentumLabel::Neutral);
    assert_eq!(momentum_label(0.4001), MomentumLabel::Neutral);
    assert_eq!(momentum_label(0.4), MomentumLabel::Bearish);
}

#[test]
fn test_big_move_raised_bullish() {
    let warning = detect_big_move(&big_move_snapshot()).unwrap();
    assert_eq!(warning.direction, MoveDirection::Bullish);
}

#[test]
fn test_big_move_bearish() {
    let mut snapshot = big_move_snapshot();
    snapshot.macd = -1.0;
    snapshot.sma.insert(50, 105.0);
    assert_eq!(
        detect_big_move(&snapshot).unwrap().direction,
        MoveDirection::Bearish
    );
}

#[test]
fn test_big_move_uncertain() {
    let mut snapshot = big_move_snapshot();
    snapshot.sma.insert(50, 105.0);
    assert_eq!(
        detect_big_move(&snapshot).unwrap().direction,
        MoveDirection::Uncertain
    );
}

#[test]
fn test_big_move_requires_every_gate() {
    let mut wide_bands = big_move_snapshot();
    wide_bands.bollinger_bandwidth = 11.0;
    assert!(detect_big_move(&wide_bands).is_none());

    let mut calm = big_move_snapshot();
    calm.atr14 = 2.0;
    assert!(detect_big_move(&calm).is_none());

    let mut thin_volume = big_move_snapshot();
    thin_volume.latest_volume = 110.0;
    assert!(detect_big_move(&thin_volume).is_none());
}

#[test]
fn test_gate_predicates() {
    assert!(is_band_squeeze(9.99));
    assert!(!is_band_squeeze(10.0));
    assert!(is_elevated_range(3.1, 100.0));
    assert!(!is_elevated_range(2.9, 100.0));
    assert!(is_volume_surge(121.0, 100.0));
    assert!(!is_volume_surge(119.0, 100.0));
}
