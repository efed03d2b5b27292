//! Technical indicators for price series
//!
//! # EMA Convention
//! All exponential averages use the recursive, non-adjusted form
//! (pandas `ewm(span=n, adjust=False)`):
//!
//! - `ema[0] = x[0]`
//! - `ema[i] = ema[i-1] + alpha * (x[i] - ema[i-1])`, `alpha = 2 / (span + 1)`
//!
//! There is no warm-up region: every input row produces an output row.

use crate::constants::macd;
use crate::models::PriceSeries;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Spans for the MACD computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacdParams {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast: macd::FAST_SPAN,
            slow: macd::SLOW_SPAN,
            signal: macd::SIGNAL_SPAN,
        }
    }
}

/// One derived row per input timestamp
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacdRow {
    pub time: DateTime<Utc>,
    pub close: f64,
    pub ema_fast: f64,
    pub ema_slow: f64,
    /// ema_fast - ema_slow
    pub macd: f64,
    /// EMA of the macd line
    pub signal: f64,
    /// macd - signal
    pub hist: f64,
}

/// Calculate the exponential moving average for a given span
///
/// # Arguments
/// * `values` - Input sequence in time order
/// * `span` - EMA span; `alpha = 2 / (span + 1)`
///
/// # Returns
/// * Vector of EMA values, same length as input
pub fn calculate_ema(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = 2.0 / (span as f64 + 1.0);
    let mut ema_values = Vec::with_capacity(values.len());

    let mut iter = values.iter();
    let Some(&first) = iter.next() else {
        return ema_values;
    };

    let mut prev = first;
    ema_values.push(prev);
    for &value in iter {
        prev += alpha * (value - prev);
        ema_values.push(prev);
    }

    ema_values
}

/// Compute MACD, signal line and histogram for every point of the series
pub fn compute_macd(series: &PriceSeries, params: MacdParams) -> Vec<MacdRow> {
    let closes = series.closes();

    let ema_fast = calculate_ema(&closes, params.fast);
    let ema_slow = calculate_ema(&closes, params.slow);
    let macd_line: Vec<f64> = ema_fast
        .iter()
        .zip(&ema_slow)
        .map(|(fast, slow)| fast - slow)
        .collect();
    let signal_line = calculate_ema(&macd_line, params.signal);

    series
        .points()
        .iter()
        .enumerate()
        .map(|(i, point)| MacdRow {
            time: point.time,
            close: point.close,
            ema_fast: ema_fast[i],
            ema_slow: ema_slow[i],
            macd: macd_line[i],
            signal: signal_line[i],
            hist: macd_line[i] - signal_line[i],
        })
        .collect()
}
