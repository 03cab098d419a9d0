//! Fundamentals ratios for a coin's market snapshot.
//!
//! Ratios with a zero or missing denominator read as 0 rather than failing, except
//! the all-time-high/low distances where a zero reference price is meaningless.

use serde::{Deserialize, Serialize};

use crate::indicators::error::IndicatorError;

pub const NANO_CAP_MAX: f64 = 1_000_000.0;
pub const MICRO_CAP_MAX: f64 = 10_000_000.0;
pub const SMALL_CAP_MAX: f64 = 100_000_000.0;

pub const HIGH_ACTIVITY_RATIO: f64 = 0.1;
pub const MODERATE_ACTIVITY_RATIO: f64 = 0.01;

pub const SUSTAINED_VOLUME_CHANGE_PCT: f64 = 50.0;
pub const TENTATIVE_VOLUME_CHANGE_PCT: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinFundamentals {
    pub current_price: f64,
    pub market_cap: f64,
    pub total_volume: f64,
    pub circulating_supply: f64,
    #[serde(default)]
    pub total_supply: Option<f64>,
    #[serde(default)]
    pub fully_diluted_valuation: Option<f64>,
    pub ath: f64,
    pub atl: f64,
    /// Volume of the preceding 24h window, when known.
    #[serde(default)]
    pub previous_volume: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketCapTier {
    Nano,
    Micro,
    Small,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiquidityActivity {
    High,
    Moderate,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DilutionOutlook {
    /// Tokens still to be released can dilute holders.
    FutureDilution,
    FullyCirculating,
    /// FDV below market cap: inconsistent supply data or unusual tokenomics.
    Atypical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupplyOutlook {
    Expanding,
    FullyCirculating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeMomentum {
    Sustained,
    Tentative,
    ShortLived,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioReading<T> {
    pub ratio: f64,
    pub outlook: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeChange {
    pub change_pct: f64,
    pub increased: bool,
    pub momentum: VolumeMomentum,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundamentalsReport {
    pub market_cap_tier: MarketCapTier,
    pub volume_to_market_cap: RatioReading<LiquidityActivity>,
    pub fdv_to_market_cap: RatioReading<DilutionOutlook>,
    pub circulating_to_total_supply: RatioReading<SupplyOutlook>,
    pub liquidity_to_supply: RatioReading<bool>,
    pub price_vs_ath_pct: f64,
    pub price_vs_atl_pct: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_change: Option<VolumeChange>,
}

fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

pub fn classify_market_cap(market_cap: f64) -> MarketCapTier {
    if market_cap < NANO_CAP_MAX {
        MarketCapTier::Nano
    } else if market_cap < MICRO_CAP_MAX {
        MarketCapTier::Micro
    } else if market_cap < SMALL_CAP_MAX {
        MarketCapTier::Small
    } else {
        MarketCapTier::Large
    }
}

pub fn volume_to_market_cap(total_volume: f64, market_cap: f64) -> RatioReading<LiquidityActivity> {
    let ratio = ratio_or_zero(total_volume, market_cap);
    let outlook = if ratio > HIGH_ACTIVITY_RATIO {
        LiquidityActivity::High
    } else if ratio > MODERATE_ACTIVITY_RATIO {
        LiquidityActivity::Moderate
    } else {
        LiquidityActivity::Low
    };
    RatioReading { ratio, outlook }
}

pub fn fdv_to_market_cap(fdv: Option<f64>, market_cap: f64) -> RatioReading<DilutionOutlook> {
    let ratio = ratio_or_zero(fdv.unwrap_or(0.0), market_cap);
    let outlook = if ratio > 1.0 {
        DilutionOutlook::FutureDilution
    } else if ratio == 1.0 {
        DilutionOutlook::FullyCirculating
    } else {
        DilutionOutlook::Atypical
    };
    RatioReading { ratio, outlook }
}

pub fn circulating_to_total_supply(
    circulating: f64,
    total: Option<f64>,
) -> RatioReading<SupplyOutlook> {
    let ratio = ratio_or_zero(circulating, total.unwrap_or(0.0));
    let outlook = if ratio < 1.0 {
        SupplyOutlook::Expanding
    } else {
        SupplyOutlook::FullyCirculating
    };
    RatioReading { ratio, outlook }
}

/// Ratio plus whether volume exceeds the circulating supply.
pub fn liquidity_to_supply(total_volume: f64, circulating: f64) -> RatioReading<bool> {
    let ratio = ratio_or_zero(total_volume, circulating);
    RatioReading {
        ratio,
        outlook: ratio > 1.0,
    }
}

/// Percent distance of the price from its all-time high (negative below it).
pub fn price_vs_ath(price: f64, ath: f64) -> Result<f64, IndicatorError> {
    if ath == 0.0 {
        return Err(IndicatorError::DivideByZero("price_vs_ath"));
    }
    Ok((price - ath) / ath * 100.0)
}

/// Percent distance of the price above its all-time low.
pub fn price_vs_atl(price: f64, atl: f64) -> Result<f64, IndicatorError> {
    if atl == 0.0 {
        return Err(IndicatorError::DivideByZero("price_vs_atl"));
    }
    Ok((price - atl) / atl * 100.0)
}

pub fn volume_change(current: f64, previous: f64) -> VolumeChange {
    let change_pct = ratio_or_zero(current - previous, previous) * 100.0;
    let momentum = if change_pct > SUSTAINED_VOLUME_CHANGE_PCT {
        VolumeMomentum::Sustained
    } else if change_pct > TENTATIVE_VOLUME_CHANGE_PCT {
        VolumeMomentum::Tentative
    } else {
        VolumeMomentum::ShortLived
    };
    VolumeChange {
        change_pct,
        increased: change_pct > 0.0,
        momentum,
    }
}

pub fn assess(coin: &CoinFundamentals) -> Result<FundamentalsReport, IndicatorError> {
    Ok(FundamentalsReport {
        market_cap_tier: classify_market_cap(coin.market_cap),
        volume_to_market_cap: volume_to_market_cap(coin.total_volume, coin.market_cap),
        fdv_to_market_cap: fdv_to_market_cap(coin.fully_diluted_valuation, coin.market_cap),
        circulating_to_total_supply: circulating_to_total_supply(
            coin.circulating_supply,
            coin.total_supply,
        ),
        liquidity_to_supply: liquidity_to_supply(coin.total_volume, coin.circulating_supply),
        price_vs_ath_pct: price_vs_ath(coin.current_price, coin.ath)?,
        price_vs_atl_pct: price_vs_atl(coin.current_price, coin.atl)?,
        volume_change: coin
            .previous_volume
            .map(|previous| volume_change(coin.total_volume, previous)),
    })
}
