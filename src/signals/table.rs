//! Per-period BUY/SELL table

use crate::indicators::trend::SMA_PERIODS;
use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::{SignalAction, SignalRow};

/// BUY only when price is strictly above the average; a tie is a SELL.
pub fn signal_for(price: f64, average: f64) -> SignalAction {
    if price > average {
        SignalAction::Buy
    } else {
        SignalAction::Sell
    }
}

/// Half-to-even rounding of month bounds.
fn round_months(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Human-readable horizon for a period measured in weeks.
pub fn timeframe_label(weeks: u32) -> String {
    if weeks < 4 {
        return format!("{} days", weeks * 7);
    }
    if weeks < 52 {
        let min_months = round_months(weeks as f64 / 4.5);
        let max_months = round_months(weeks as f64 / 4.0);
        return format!("{}-{} months", min_months, max_months);
    }
    format!("{:.1} years", weeks as f64 / 52.0)
}

/// One row per configured moving-average period, shortest first.
pub fn build_signal_table(snapshot: &IndicatorSnapshot) -> Vec<SignalRow> {
    let price = snapshot.latest_close;
    SMA_PERIODS
        .iter()
        .map(|&period| {
            let value = snapshot.sma_or_close(period);
            SignalRow {
                period_name: format!("{}-week SMA", period),
                period_weeks: period,
                value,
                signal: signal_for(price, value),
                timeframe_label: timeframe_label(period),
            }
        })
        .collect()
}
