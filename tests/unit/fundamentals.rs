//! Unit tests for fundamentals ratios

use approx::assert_relative_eq;
use coinscope::fundamentals::*;
use coinscope::IndicatorError;

fn sample_coin() -> CoinFundamentals {
    CoinFundamentals {
        current_price: 50.0,
        market_cap: 500_000_000.0,
        total_volume: 75_000_000.0,
        circulating_supply: 10_000_000.0,
        total_supply: Some(20_000_000.0),
        fully_diluted_valuation: Some(1_000_000_000.0),
        ath: 100.0,
        atl: 5.0,
        previous_volume: Some(40_000_000.0),
    }
}

#[test]
fn test_market_cap_tiers() {
    assert_eq!(classify_market_cap(999_999.0), MarketCapTier::Nano);
    assert_eq!(classify_market_cap(1_000_000.0), MarketCapTier::Micro);
    assert_eq!(classify_market_cap(50_000_000.0), MarketCapTier::Small);
    assert_eq!(classify_market_cap(100_000_000.0), MarketCapTier::Large);
}

#[test]
fn test_volume_to_market_cap() {
    let high = volume_to_market_cap(20.0, 100.0);
    assert_relative_eq!(high.ratio, 0.2);
    assert_eq!(high.outlook, LiquidityActivity::High);
    assert_eq!(volume_to_market_cap(5.0, 100.0).outlook, LiquidityActivity::Moderate);
    assert_eq!(volume_to_market_cap(0.5, 100.0).outlook, LiquidityActivity::Low);
    assert_eq!(volume_to_market_cap(10.0, 0.0).ratio, 0.0);
}

#[test]
fn test_fdv_to_market_cap() {
    assert_eq!(fdv_to_market_cap(Some(200.0), 100.0).outlook, DilutionOutlook::FutureDilution);
    assert_eq!(fdv_to_market_cap(Some(100.0), 100.0).outlook, DilutionOutlook::FullyCirculating);
    assert_eq!(fdv_to_market_cap(Some(50.0), 100.0).outlook, DilutionOutlook::Atypical);
    assert_eq!(fdv_to_market_cap(None, 100.0).ratio, 0.0);
}

#[test]
fn test_circulating_supply() {
    assert_eq!(
        circulating_to_total_supply(50.0, Some(100.0)).outlook,
        SupplyOutlook::Expanding
    );
    assert_eq!(
        circulating_to_total_supply(100.0, Some(100.0)).outlook,
        SupplyOutlook::FullyCirculating
    );
    assert_eq!(circulating_to_total_supply(100.0, None).ratio, 0.0);
}

#[test]
fn test_liquidity_to_supply() {
    assert!(liquidity_to_supply(200.0, 100.0).outlook);
    assert!(!liquidity_to_supply(50.0, 100.0).outlook);
    assert_eq!(liquidity_to_supply(50.0, 0.0).ratio, 0.0);
}

#[test]
fn test_price_vs_extremes() {
    assert_relative_eq!(price_vs_ath(50.0, 100.0).unwrap(), -50.0);
    assert_relative_eq!(price_vs_atl(50.0, 5.0).unwrap(), 900.0);
    assert_eq!(
        price_vs_ath(50.0, 0.0).unwrap_err(),
        IndicatorError::DivideByZero("price_vs_ath")
    );
    assert!(price_vs_atl(50.0, 0.0).is_err());
}

#[test]
fn test_volume_change() {
    let sustained = volume_change(160.0, 100.0);
    assert_relative_eq!(sustained.change_pct, 60.0, epsilon = 1e-9);
    assert!(sustained.increased);
    assert_eq!(sustained.momentum, VolumeMomentum::Sustained);
    assert_eq!(volume_change(130.0, 100.0).momentum, VolumeMomentum::Tentative);

    let fading = volume_change(80.0, 100.0);
    assert!(!fading.increased);
    assert_eq!(fading.momentum, VolumeMomentum::ShortLived);

    assert_eq!(volume_change(80.0, 0.0).change_pct, 0.0);
}

#[test]
fn test_assess() {
    let report = assess(&sample_coin()).unwrap();
    assert_eq!(report.market_cap_tier, MarketCapTier::Large);
    assert_eq!(report.volume_to_market_cap.outlook, LiquidityActivity::High);
    assert_eq!(report.fdv_to_market_cap.outlook, DilutionOutlook::FutureDilution);
    assert_relative_eq!(report.circulating_to_total_supply.ratio, 0.5);
    assert!(report.liquidity_to_supply.outlook);
    assert_relative_eq!(report.price_vs_ath_pct, -50.0);
    assert_eq!(
        report.volume_change.unwrap().momentum,
        VolumeMomentum::Sustained
    );
}

#[test]
fn test_assess_without_previous_volume() {
    let mut coin = sample_coin();
    coin.previous_volume = None;
    assert!(assess(&coin).unwrap().volume_change.is_none());
}
