// =============================================================================
// Bar — one OHLCV observation
// =============================================================================
//
// The sole input to the analysis pipeline is a slice of bars ordered by
// non-decreasing timestamp.  The pipeline treats the sequence purely by
// index; no gap-filling or calendar awareness.

use serde::{Deserialize, Serialize};

/// A single OHLCV bar.  `timestamp` is epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Check that a bar series is usable: timestamps monotonic non-decreasing and
/// every OHLCV field finite.  The pipeline treats anything else as
/// insufficient data rather than attempting a partial computation.
pub fn is_valid_series(bars: &[Bar]) -> bool {
    let mut prev_ts = i64::MIN;
    for bar in bars {
        if bar.timestamp < prev_ts {
            return false;
        }
        prev_ts = bar.timestamp;

        let fields = [bar.open, bar.high, bar.low, bar.close, bar.volume];
        if fields.iter().any(|v| !v.is_finite()) {
            return false;
        }
    }
    true
}
