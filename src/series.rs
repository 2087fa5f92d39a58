// =============================================================================
// Series Math — rolling / exponential numeric primitives
// =============================================================================
//
// Building blocks for the indicator bank.  Windowed functions (`sma`,
// `rolling_std`) return a vector aligned index-for-index with the input,
// holding `None` at every position before the warm-up window is full.
// Exponential functions (`ema`, `wilder_smooth`) are seeded with the first
// element and therefore defined from index 0; their output is dense.

/// Simple moving average over a trailing window of `period` elements.
///
/// The output has the same length as the input.  Indices with fewer than
/// `period` preceding elements (inclusive) are `None`; so is everything when
/// `period` is zero.
pub fn sma(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }

    for (offset, window) in values.windows(period).enumerate() {
        let mean = window.iter().sum::<f64>() / period as f64;
        out[period - 1 + offset] = Some(mean);
    }
    out
}

/// Exponential moving average with smoothing factor `alpha = 2 / (period + 1)`.
///
/// Seeded with the first element; no separate warm-up phase, so every output
/// index is defined.  Returns an empty vector for an empty input or a zero
/// period.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    exponential(values, 2.0 / (period as f64 + 1.0), period)
}

/// Wilder smoothing: exponential smoothing with `alpha = 1 / period`, the
/// variant RSI and ATR are built on.  Seeded the same way as [`ema`].
pub fn wilder_smooth(values: &[f64], period: usize) -> Vec<f64> {
    exponential(values, 1.0 / period as f64, period)
}

fn exponential(values: &[f64], alpha: f64, period: usize) -> Vec<f64> {
    if period == 0 || values.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(values.len());
    let mut prev = values[0];
    out.push(prev);
    for &value in &values[1..] {
        prev = value * alpha + prev * (1.0 - alpha);
        out.push(prev);
    }
    out
}

/// Sample standard deviation (divide by `period - 1`) over a trailing window.
///
/// Aligned with the input; `None` before `period` elements are available.
/// A period below 2 leaves the divisor non-positive, so the output is all
/// `None` in that case.
pub fn rolling_std(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period < 2 || values.len() < period {
        return out;
    }

    for (offset, window) in values.windows(period).enumerate() {
        let mean = window.iter().sum::<f64>() / period as f64;
        let variance =
            window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (period as f64 - 1.0);
        out[period - 1 + offset] = Some(variance.sqrt());
    }
    out
}
