// =============================================================================
// MACD — Moving Average Convergence Divergence
// =============================================================================
//
// Formula:
//   macd_line   = EMA(close, fast) - EMA(close, slow)
//   signal_line = EMA(macd_line, signal)
//   histogram   = macd_line - signal_line
//
// Defaults: fast=12, slow=26, signal=9.  Because the EMAs are seeded with
// the first close, every series here is dense and defined from index 0.
// =============================================================================

use crate::series::ema;

/// The three MACD series, each aligned with the input closes.
#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub macd_line: Vec<f64>,
    pub signal_line: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// Compute MACD for the given closes.
///
/// Returns empty series for an empty input or a zero period.
pub fn calculate_macd(closes: &[f64], fast: usize, slow: usize, signal: usize) -> MacdSeries {
    if closes.is_empty() || fast == 0 || slow == 0 || signal == 0 {
        return MacdSeries {
            macd_line: Vec::new(),
            signal_line: Vec::new(),
            histogram: Vec::new(),
        };
    }

    let fast_ema = ema(closes, fast);
    let slow_ema = ema(closes, slow);

    let macd_line: Vec<f64> = fast_ema
        .iter()
        .zip(slow_ema.iter())
        .map(|(f, s)| f - s)
        .collect();

    let signal_line = ema(&macd_line, signal);

    let histogram: Vec<f64> = macd_line
        .iter()
        .zip(signal_line.iter())
        .map(|(m, s)| m - s)
        .collect();

    MacdSeries {
        macd_line,
        signal_line,
        histogram,
    }
}
