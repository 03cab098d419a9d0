//! Rolling-window statistics used by every indicator.
//!
//! Two flavours exist. [`sma`] and [`sma_series`] are strict: a window that does not
//! fit is an error (or simply absent from the series). The `trailing_*` / `rolling_*`
//! helpers shrink the window to whatever data is available, so short histories still
//! produce a value.

use crate::indicators::error::IndicatorError;

fn check_window(window: usize) -> Result<(), IndicatorError> {
    if window == 0 {
        return Err(IndicatorError::invalid_params("window must be at least 1"));
    }
    Ok(())
}

/// Tail slice of at most `window` values. Fails on empty input.
fn degenerate_tail(values: &[f64], window: usize) -> Result<&[f64], IndicatorError> {
    check_window(window)?;
    if values.is_empty() {
        return Err(IndicatorError::insufficient(1, 0));
    }
    let len = window.min(values.len());
    Ok(&values[values.len() - len..])
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Simple moving average at the last index.
pub fn sma(values: &[f64], window: usize) -> Result<f64, IndicatorError> {
    check_window(window)?;
    if values.len() < window {
        return Err(IndicatorError::insufficient(window, values.len()));
    }
    Ok(mean(&values[values.len() - window..]))
}

/// Every valid SMA value, starting at index `window - 1`.
pub fn sma_series(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || values.len() < window {
        return Vec::new();
    }
    values.windows(window).map(mean).collect()
}

/// Mean of the trailing `min(window, n)` values.
pub fn trailing_mean(values: &[f64], window: usize) -> Result<f64, IndicatorError> {
    Ok(mean(degenerate_tail(values, window)?))
}

/// Trailing sum over `min(window, n)` values.
pub fn rolling_sum(values: &[f64], window: usize) -> Result<f64, IndicatorError> {
    Ok(degenerate_tail(values, window)?.iter().sum())
}

/// Sample standard deviation (n - 1 denominator) of the trailing window.
///
/// A single-value window has zero deviation.
pub fn rolling_std(values: &[f64], window: usize) -> Result<f64, IndicatorError> {
    let tail = degenerate_tail(values, window)?;
    if tail.len() < 2 {
        return Ok(0.0);
    }
    let avg = mean(tail);
    let variance =
        tail.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (tail.len() - 1) as f64;
    Ok(variance.sqrt())
}

/// Smoothing factor for an EMA span.
pub fn ema_alpha(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}

/// One recursive EMA step.
pub fn ema_from_previous(value: f64, previous: f64, span: usize) -> f64 {
    let alpha = ema_alpha(span);
    alpha * value + (1.0 - alpha) * previous
}

/// Full EMA series seeded with the first observation.
pub fn ema(values: &[f64], span: usize) -> Result<Vec<f64>, IndicatorError> {
    check_window(span)?;
    let Some(&first) = values.first() else {
        return Err(IndicatorError::insufficient(1, 0));
    };

    let mut series = Vec::with_capacity(values.len());
    let mut previous = first;
    series.push(previous);
    for &value in &values[1..] {
        previous = ema_from_previous(value, previous, span);
        series.push(previous);
    }
    Ok(series)
}

/// True range of a bar given the previous close.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    (high - low)
        .max((high - prev_close).abs())
        .max((low - prev_close).abs())
}
