// =============================================================================
// Interpreter — threshold classification of the latest snapshot
// =============================================================================
//
// Pure, stateless mapping from the rounded snapshot to one reading per
// indicator: an uppercase label plus a detail string embedding the numeric
// value(s).  Thresholds come from `SignalThresholds`; nothing here carries a
// bare constant.
//
// An input that is undefined at the final index (RSI in a one-sided market,
// stochastic over a zero-range window, a zero-width Bollinger band, a zero
// volume average) classifies as INDETERMINATE rather than being forced into
// an oversold/overbought/neutral bucket.
// =============================================================================

use serde::Serialize;

use crate::analysis::SnapshotValues;
use crate::config::SignalThresholds;

/// One classified indicator reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub label: &'static str,
    pub detail: String,
}

impl Reading {
    fn new(label: &'static str, detail: String) -> Self {
        Self { label, detail }
    }
}

/// The full interpretation map, one reading per classified indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interpretations {
    pub rsi: Reading,
    pub macd: Reading,
    pub ema_cross: Reading,
    pub bb: Reading,
    pub stoch: Reading,
    pub volume: Reading,
}

/// Classify every indicator in the snapshot.
pub fn interpret(values: &SnapshotValues, thresholds: &SignalThresholds) -> Interpretations {
    Interpretations {
        rsi: interpret_rsi(values.rsi, thresholds),
        macd: interpret_macd(values),
        ema_cross: interpret_ema_cross(values),
        bb: interpret_bollinger(values),
        stoch: interpret_stochastic(values.stoch_k, values.stoch_d, thresholds),
        volume: interpret_volume(values.volume, values.volume_avg, thresholds),
    }
}

/// RSI: below `rsi_oversold` reads OVERSOLD, above `rsi_overbought` reads
/// OVERBOUGHT, otherwise NEUTRAL.
pub fn interpret_rsi(rsi: Option<f64>, thresholds: &SignalThresholds) -> Reading {
    match rsi {
        None => Reading::new(
            "INDETERMINATE",
            "RSI undefined (flat or one-sided price history)".to_string(),
        ),
        Some(r) if r < thresholds.rsi_oversold => {
            Reading::new("OVERSOLD", format!("Oversold ({r:.2}), potential bounce"))
        }
        Some(r) if r > thresholds.rsi_overbought => Reading::new(
            "OVERBOUGHT",
            format!("Overbought ({r:.2}), potential pullback"),
        ),
        Some(r) => Reading::new("NEUTRAL", format!("Neutral ({r:.2})")),
    }
}

/// MACD: line above signal with a positive histogram is BULLISH, the mirror
/// is BEARISH, anything else is the ambiguous CROSSING state.
pub fn interpret_macd(values: &SnapshotValues) -> Reading {
    if values.macd > values.macd_signal && values.macd_hist > 0.0 {
        Reading::new(
            "BULLISH",
            format!(
                "MACD {:.2} above signal {:.2}, histogram positive",
                values.macd, values.macd_signal
            ),
        )
    } else if values.macd < values.macd_signal && values.macd_hist < 0.0 {
        Reading::new(
            "BEARISH",
            format!(
                "MACD {:.2} below signal {:.2}, histogram negative",
                values.macd, values.macd_signal
            ),
        )
    } else {
        Reading::new(
            "CROSSING",
            format!(
                "MACD {:.2} vs signal {:.2}, potential trend change",
                values.macd, values.macd_signal
            ),
        )
    }
}

/// EMA crossover: binary, no neutral state.
pub fn interpret_ema_cross(values: &SnapshotValues) -> Reading {
    if values.ema_short > values.ema_long {
        Reading::new(
            "BULLISH",
            format!(
                "Short EMA {:.2} above long EMA {:.2}",
                values.ema_short, values.ema_long
            ),
        )
    } else {
        Reading::new(
            "BEARISH",
            format!(
                "Short EMA {:.2} below long EMA {:.2}",
                values.ema_short, values.ema_long
            ),
        )
    }
}

/// Bollinger: close outside a band is a breakout/breakdown; inside, the
/// reading is the close's percentage position between the bands.  A
/// zero-width band has no defined position.
pub fn interpret_bollinger(values: &SnapshotValues) -> Reading {
    let close = values.close;
    if close > values.bb_upper {
        Reading::new(
            "BREAKOUT",
            format!(
                "Close {:.2} above upper band {:.2}, overbought or breakout",
                close, values.bb_upper
            ),
        )
    } else if close < values.bb_lower {
        Reading::new(
            "BREAKDOWN",
            format!(
                "Close {:.2} below lower band {:.2}, oversold or breakdown",
                close, values.bb_lower
            ),
        )
    } else {
        let width = values.bb_upper - values.bb_lower;
        if width == 0.0 {
            return Reading::new(
                "INDETERMINATE",
                format!("Bands collapsed at {close:.2}, position undefined"),
            );
        }
        let pct = (close - values.bb_lower) / width * 100.0;
        Reading::new(
            "WITHIN_BANDS",
            format!("Within bands ({pct:.2}% above lower band)"),
        )
    }
}

/// Stochastic: both %K and %D past a threshold read oversold/overbought.
pub fn interpret_stochastic(
    k: Option<f64>,
    d: Option<f64>,
    thresholds: &SignalThresholds,
) -> Reading {
    match (k, d) {
        (Some(k), Some(d)) => {
            if k < thresholds.stoch_oversold && d < thresholds.stoch_oversold {
                Reading::new("OVERSOLD", format!("Oversold (%K={k:.2}, %D={d:.2})"))
            } else if k > thresholds.stoch_overbought && d > thresholds.stoch_overbought {
                Reading::new("OVERBOUGHT", format!("Overbought (%K={k:.2}, %D={d:.2})"))
            } else {
                Reading::new("NEUTRAL", format!("Neutral (%K={k:.2}, %D={d:.2})"))
            }
        }
        _ => Reading::new(
            "INDETERMINATE",
            "Stochastic undefined (zero-range window)".to_string(),
        ),
    }
}

/// Volume: latest volume as a multiple of its moving average.
pub fn interpret_volume(volume: i64, volume_avg: i64, thresholds: &SignalThresholds) -> Reading {
    if volume_avg == 0 {
        return Reading::new(
            "INDETERMINATE",
            "Volume average is zero, ratio undefined".to_string(),
        );
    }
    let ratio = volume as f64 / volume_avg as f64;
    if ratio > thresholds.volume_high_ratio {
        Reading::new(
            "HIGH",
            format!("High volume ({ratio:.2}x average), strong conviction"),
        )
    } else if ratio < thresholds.volume_low_ratio {
        Reading::new(
            "LOW",
            format!("Low volume ({ratio:.2}x average), weak conviction"),
        )
    } else {
        Reading::new("NORMAL", format!("Normal volume ({ratio:.2}x average)"))
    }
}
