// =============================================================================
// EMA Crossover — short EMA vs long EMA trend read
// =============================================================================
//
// Defaults: short=9, long=21.  Short above long is bullish; the read is
// binary, there is no neutral state.

use crate::series::ema;

/// The short and long EMA series, aligned with the input closes.
#[derive(Debug, Clone)]
pub struct EmaCrossSeries {
    pub short: Vec<f64>,
    pub long: Vec<f64>,
}

impl EmaCrossSeries {
    /// Latest (short, long) pair, if the series are non-empty.
    pub fn latest(&self) -> Option<(f64, f64)> {
        Some((*self.short.last()?, *self.long.last()?))
    }
}

/// Compute both crossover legs.  Empty series for empty input or zero periods.
pub fn calculate_ema_cross(closes: &[f64], short: usize, long: usize) -> EmaCrossSeries {
    EmaCrossSeries {
        short: ema(closes, short),
        long: ema(closes, long),
    }
}
