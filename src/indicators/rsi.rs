// =============================================================================
// Relative Strength Index (RSI) — Wilder's Smoothing
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes.
//
// Step 1 — Split close-to-close deltas into gains and losses (absolute value).
// Step 2 — Smooth each side with Wilder's method (alpha = 1/period), seeded
//          with the first delta.
// Step 3 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
//
// The reading is undefined whenever either smoothed average is zero: a flat
// or one-sided market has no meaningful relative-strength ratio, so those
// indices hold `None` instead of a saturated 0/100.  Index 0 has no delta
// and is always `None`.
// =============================================================================

use crate::series::wilder_smooth;

/// Compute the full RSI series, aligned with the input closes.
pub fn calculate_rsi(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if period == 0 || closes.len() < 2 {
        return out;
    }

    let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();
    let gains: Vec<f64> = deltas.iter().map(|d| d.max(0.0)).collect();
    let losses: Vec<f64> = deltas.iter().map(|d| (-d).max(0.0)).collect();

    let avg_gain = wilder_smooth(&gains, period);
    let avg_loss = wilder_smooth(&losses, period);

    // The delta series is one shorter than the closes; RSI at bar i reads the
    // smoothed averages of the delta ending at bar i.
    for i in 1..closes.len() {
        let gain = avg_gain[i - 1];
        let loss = avg_loss[i - 1];
        if gain > 0.0 && loss > 0.0 {
            let rs = gain / loss;
            out[i] = Some(100.0 - 100.0 / (1.0 + rs));
        }
    }

    out
}
