//! Unit tests for the evaluation cache

use crate::test_utils::{create_uptrend_candles, series};
use coinscope::services::{CacheKey, EvaluationCache};
use coinscope::SignalEngine;

#[test]
fn test_cache_hit_returns_same_evaluation() {
    let input = series(create_uptrend_candles(260));
    let mut cache = EvaluationCache::new();

    let first = cache.get_or_evaluate(&input).unwrap();
    let second = cache.get_or_evaluate(&input).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, SignalEngine::evaluate(&input).unwrap());
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.hits(), 1);
    assert_eq!(cache.misses(), 1);
}

#[test]
fn test_new_bar_replaces_previous_entry() {
    let mut cache = EvaluationCache::new();
    let older = series(create_uptrend_candles(100));
    cache.get_or_evaluate(&older).unwrap();
    for count in 101..=120 {
        cache.get_or_evaluate(&series(create_uptrend_candles(count))).unwrap();
    }
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.hits(), 0);

    cache.get_or_evaluate(&older).unwrap();
    assert_eq!(cache.misses(), 22);
}

#[test]
fn test_markets_cached_independently() {
    let mut cache = EvaluationCache::new();
    let btc = series(create_uptrend_candles(60));
    let eth = btc.clone().with_symbol("ETH");
    cache.get_or_evaluate(&btc).unwrap();
    cache.get_or_evaluate(&eth).unwrap();
    cache.get_or_evaluate(&btc).unwrap();
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.hits(), 1);
}

#[test]
fn test_symbol_and_interval_are_part_of_key() {
    let base = series(create_uptrend_candles(50));
    let key = CacheKey::for_series(&base).unwrap();
    assert_ne!(key, CacheKey::for_series(&base.clone().with_symbol("ETH")).unwrap());
    assert_ne!(key, CacheKey::for_series(&base.clone().with_interval("1d")).unwrap());
}

#[test]
fn test_errors_not_cached() {
    let mut cache = EvaluationCache::new();
    let tiny = series(create_uptrend_candles(1));
    assert!(cache.get_or_evaluate(&tiny).is_err());
    assert!(cache.get_or_evaluate(&tiny).is_err());
    assert!(cache.is_empty());
    assert_eq!(cache.misses(), 2);
}

#[test]
fn test_clear() {
    let mut cache = EvaluationCache::new();
    cache.get_or_evaluate(&series(create_uptrend_candles(30))).unwrap();
    cache.clear();
    assert!(cache.is_empty());
}
