// =============================================================================
// Stochastic Oscillator (%K / %D)
// =============================================================================
//
// %K = 100 * (close - lowest_low(k_period)) / (highest_high(k_period) - lowest_low(k_period))
// %D = SMA(%K, d_period)
//
// Defaults: k_period=14, d_period=3.  %K is undefined before the window is
// full and wherever the window's high-low range is exactly zero (explicit
// pre-check on the denominator).  %D requires `d_period` consecutive defined
// %K values.
// =============================================================================

use crate::bar::Bar;

/// The %K and %D series, aligned with the input bars.
#[derive(Debug, Clone)]
pub struct StochasticSeries {
    pub k: Vec<Option<f64>>,
    pub d: Vec<Option<f64>>,
}

/// Compute the stochastic oscillator for the given bars.
pub fn calculate_stochastic(bars: &[Bar], k_period: usize, d_period: usize) -> StochasticSeries {
    let n = bars.len();
    let mut k = vec![None; n];
    let mut d = vec![None; n];

    if k_period == 0 || d_period == 0 || n < k_period {
        return StochasticSeries { k, d };
    }

    for i in (k_period - 1)..n {
        let window = &bars[i + 1 - k_period..=i];
        let highest = window.iter().map(|b| b.high).fold(f64::MIN, f64::max);
        let lowest = window.iter().map(|b| b.low).fold(f64::MAX, f64::min);

        let range = highest - lowest;
        if range == 0.0 {
            continue;
        }
        k[i] = Some(100.0 * (bars[i].close - lowest) / range);
    }

    for i in (d_period - 1)..n {
        let window = &k[i + 1 - d_period..=i];
        if window.iter().all(Option::is_some) {
            let sum: f64 = window.iter().flatten().sum();
            d[i] = Some(sum / d_period as f64);
        }
    }

    StochasticSeries { k, d }
}
