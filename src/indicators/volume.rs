// =============================================================================
// Volume Indicators — On-Balance Volume and the volume moving average
// =============================================================================
//
// OBV is the cumulative sum of volume signed by the close-to-close direction.
// A flat close contributes zero, as does the first bar (no previous close).
// The volume moving average is a plain SMA over the volume column.

use crate::bar::Bar;
use crate::series::sma;

/// Compute the OBV series, aligned with the input bars.
pub fn calculate_obv(bars: &[Bar]) -> Vec<f64> {
    let mut out = Vec::with_capacity(bars.len());
    let mut total = 0.0;
    for i in 0..bars.len() {
        if i > 0 {
            let delta = bars[i].close - bars[i - 1].close;
            if delta > 0.0 {
                total += bars[i].volume;
            } else if delta < 0.0 {
                total -= bars[i].volume;
            }
        }
        out.push(total);
    }
    out
}

/// Moving average of volume over a trailing window.  Default period: 20.
pub fn calculate_volume_sma(bars: &[Bar], period: usize) -> Vec<Option<f64>> {
    let volumes: Vec<f64> = bars.iter().map(|b| b.volume).collect();
    sma(&volumes, period)
}
