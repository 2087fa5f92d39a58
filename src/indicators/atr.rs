// =============================================================================
// Average True Range (ATR) — Wilder's Smoothing
// =============================================================================
//
// True Range per bar:
//   TR = max(H - L, |H - prevClose|, |L - prevClose|)
//
// The first bar has no previous close; its true range is H - L.  ATR is the
// Wilder-smoothed (alpha = 1/period) true-range series, seeded with the
// first value, so the output is dense and aligned with the input.
//
// Default period: 14
// =============================================================================

use crate::bar::Bar;
use crate::series::wilder_smooth;

/// Compute the ATR series for the given bars.
///
/// Returns an empty vector for an empty input or a zero period.
pub fn calculate_atr(bars: &[Bar], period: usize) -> Vec<f64> {
    if period == 0 || bars.is_empty() {
        return Vec::new();
    }

    let mut true_ranges = Vec::with_capacity(bars.len());
    true_ranges.push(bars[0].high - bars[0].low);
    for i in 1..bars.len() {
        let high = bars[i].high;
        let low = bars[i].low;
        let prev_close = bars[i - 1].close;

        let hl = high - low;
        let hc = (high - prev_close).abs();
        let lc = (low - prev_close).abs();
        true_ranges.push(hl.max(hc).max(lc));
    }

    wilder_smooth(&true_ranges, period)
}
