// =============================================================================
// Bollinger Bands
// =============================================================================
//
// middle = SMA(close, period)
// upper  = middle + width * rolling_std(close, period)
// lower  = middle - width * rolling_std(close, period)
//
// Defaults: period=20, width=2.0.  The standard deviation is the sample
// variant (divide by period - 1).  Bands are defined wherever the rolling
// standard deviation is; a flat window collapses the bands to the middle,
// which is still a defined state.  Placing the close within a zero-width
// band is the interpreter's problem, not this module's.

use crate::series::{rolling_std, sma};

/// Upper / middle / lower band series, aligned with the input closes.
#[derive(Debug, Clone)]
pub struct BollingerSeries {
    pub upper: Vec<Option<f64>>,
    pub middle: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// Compute Bollinger Bands for the given closes.
pub fn calculate_bollinger(closes: &[f64], period: usize, width: f64) -> BollingerSeries {
    let middle = sma(closes, period);
    let std = rolling_std(closes, period);

    let mut upper = vec![None; closes.len()];
    let mut lower = vec![None; closes.len()];
    for i in 0..closes.len() {
        if let (Some(mid), Some(sd)) = (middle[i], std[i]) {
            upper[i] = Some(mid + width * sd);
            lower[i] = Some(mid - width * sd);
        }
    }

    BollingerSeries {
        upper,
        middle,
        lower,
    }
}
