use std::fs;
use std::path::PathBuf;

use coinscope::config::{Config, OutputFormat};
use coinscope::fundamentals::{self, CoinFundamentals, FundamentalsReport};
use coinscope::logging::init_logging;
use coinscope::models::Evaluation;
use coinscope::services::{JsonFileSource, PriceSeriesSource};
use coinscope::SignalEngine;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli_path = std::env::args().nth(1).map(PathBuf::from);
    let config = Config::from_env()?.with_series_path(cli_path);
    init_logging(&config);

    let source = JsonFileSource::new(config.require_series_path()?);
    let series = source.load_series(&config.symbol, &config.interval)?;
    info!(
        symbol = %series.symbol,
        bars = series.len(),
        "coinscope: evaluating {}",
        series.symbol
    );

    let evaluation = SignalEngine::evaluate(&series)?;

    let fundamentals = match &config.fundamentals_path {
        Some(path) => {
            let coin: CoinFundamentals = serde_json::from_str(&fs::read_to_string(path)?)?;
            Some(fundamentals::assess(&coin)?)
        }
        None => None,
    };

    match config.output {
        OutputFormat::Json => {
            let mut value = serde_json::to_value(&evaluation)?;
            if let Some(report) = &fundamentals {
                value["fundamentals"] = serde_json::to_value(report)?;
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => {
            print_evaluation(&evaluation);
            if let Some(report) = &fundamentals {
                print_fundamentals(report);
            }
        }
    }

    Ok(())
}

fn print_evaluation(evaluation: &Evaluation) {
    let snapshot = &evaluation.snapshot;
    println!("{} ({}) as of {}", evaluation.symbol, evaluation.interval, evaluation.as_of);
    println!("  Price: ${:.2}", snapshot.latest_close);
    println!("Indicators:");
    for (period, value) in &snapshot.sma {
        let note = if snapshot.substituted_periods.contains(period) {
            " (latest close, history too short)"
        } else {
            ""
        };
        println!("  SMA{}: {:.2}{}", period, value, note);
    }
    println!("  Bollinger Bandwidth: {:.2}%", snapshot.bollinger_bandwidth);
    println!("  ATR(14): {:.4}", snapshot.atr14);
    println!("  RSI(14): {:.2}", snapshot.rsi14);
    println!("  MFI(14): {:.2}", snapshot.mfi14);
    println!("  MACD: {:.4}  Signal: {:.4}", snapshot.macd, snapshot.macd_signal);
    println!("  Volume: {:.2}  Avg(50): {:.2}", snapshot.latest_volume, snapshot.avg_volume50);

    println!("Trend: {} ({:+.2}%)", evaluation.trend.label, evaluation.trend.pct_diff);
    for advisory in evaluation.trend.advisories() {
        println!("  - {}", advisory);
    }
    println!(
        "Momentum: {:?} (score {:.2})",
        evaluation.momentum.label, evaluation.momentum.score
    );
    match &evaluation.big_move {
        Some(warning) => println!("Big move likely: {:?}", warning.direction),
        None => println!("Big move likely: no"),
    }

    let confidence = &evaluation.confidence;
    println!(
        "Confidence: {:.2}% ({})",
        confidence.score * 100.0,
        confidence.label
    );
    println!(
        "  Trend {:.2} | Momentum {:.2} | Volume {:.2} | Volatility {:.2}",
        confidence.sub_scores.trend,
        confidence.sub_scores.momentum,
        confidence.sub_scores.volume,
        confidence.sub_scores.volatility
    );

    println!("Signals:");
    for row in &evaluation.signal_table {
        println!(
            "  {:<16} {:>12.2}  {:<4}  {}",
            row.period_name, row.value, row.signal, row.timeframe_label
        );
    }
}

fn print_fundamentals(report: &FundamentalsReport) {
    println!("Fundamentals:");
    println!("  Market cap tier: {:?}", report.market_cap_tier);
    println!(
        "  Vol/MCap: {:.4} ({:?})",
        report.volume_to_market_cap.ratio, report.volume_to_market_cap.outlook
    );
    println!(
        "  FDV/MCap: {:.2} ({:?})",
        report.fdv_to_market_cap.ratio, report.fdv_to_market_cap.outlook
    );
    println!(
        "  Circulating/Total: {:.6} ({:?})",
        report.circulating_to_total_supply.ratio, report.circulating_to_total_supply.outlook
    );
    println!("  Liquidity/Supply: {:.4}", report.liquidity_to_supply.ratio);
    println!("  Price vs ATH: {:.2}%", report.price_vs_ath_pct);
    println!("  Price vs ATL: {:.2}%", report.price_vs_atl_pct);
    if let Some(change) = &report.volume_change {
        println!("  Volume change (24h): {:.2}% ({:?})", change.change_pct, change.momentum);
    }
}
