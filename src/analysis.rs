// =============================================================================
// Analysis Pipeline — bars in, one report out
// =============================================================================
//
// Single entry point for the indicator core.  Given a validated bar series
// it computes the full indicator bank, rounds the latest values into a
// snapshot, classifies them, scores the composite signal, and bundles the
// aligned series for charting.
//
// The pipeline is a pure function of its input: no I/O, no retained state,
// recomputed from scratch on every call.  The only failure outcome is the
// explicit empty result (`None`) for input that is too short or malformed;
// per-index mathematical undefinedness is carried as `None` slots inside the
// series and snapshot, never as NaN.
// =============================================================================

use serde::Serialize;
use tracing::{debug, warn};

use crate::bar::{is_valid_series, Bar};
use crate::config::AnalysisConfig;
use crate::indicators::{
    calculate_atr, calculate_bollinger, calculate_ema_cross, calculate_macd, calculate_obv,
    calculate_rsi, calculate_stochastic, calculate_volume_sma,
};
use crate::interpret::{interpret, Interpretations};
use crate::score::{composite_signal, Signal};

/// The latest value of every indicator, rounded for presentation: 4 decimals
/// for price-scale values, 2 for bounded oscillators, integers for volume.
///
/// RSI and the stochastic pair stay tagged because they can be undefined even
/// on a full-length series; everything else is guaranteed defined once the
/// minimum-bars gate has passed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotValues {
    pub close: f64,
    pub rsi: Option<f64>,
    pub macd: f64,
    pub macd_signal: f64,
    pub macd_hist: f64,
    pub ema_short: f64,
    pub ema_long: f64,
    pub bb_upper: f64,
    pub bb_mid: f64,
    pub bb_lower: f64,
    pub stoch_k: Option<f64>,
    pub stoch_d: Option<f64>,
    pub atr: f64,
    pub volume: i64,
    pub volume_avg: i64,
}

/// Full aligned series for every indicator, for downstream charting.  Each
/// vector has one slot per input bar; `None` marks warm-up or an undefined
/// value at that index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesBundle {
    pub macd_line: Vec<Option<f64>>,
    pub signal_line: Vec<Option<f64>>,
    pub histogram: Vec<Option<f64>>,
    pub ema_short: Vec<Option<f64>>,
    pub ema_long: Vec<Option<f64>>,
    pub rsi: Vec<Option<f64>>,
    pub bb_upper: Vec<Option<f64>>,
    pub bb_mid: Vec<Option<f64>>,
    pub bb_lower: Vec<Option<f64>>,
    pub stoch_k: Vec<Option<f64>>,
    pub stoch_d: Vec<Option<f64>>,
    pub atr: Vec<Option<f64>>,
    pub obv: Vec<Option<f64>>,
    pub volume_avg: Vec<Option<f64>>,
}

/// The single output record of the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub values: SnapshotValues,
    pub interp: Interpretations,
    pub score: i32,
    pub signal: Signal,
    pub series: SeriesBundle,
}

/// Run the full pipeline.
///
/// Returns `None` (the explicit insufficient-data result) when the input is
/// shorter than the configured minimum, has non-monotonic timestamps, or
/// carries non-finite fields.  A returned report always has the complete
/// indicator key set.
pub fn analyze(bars: &[Bar], config: &AnalysisConfig) -> Option<AnalysisReport> {
    let required = config.required_bars();
    if bars.len() < required {
        debug!(
            bars = bars.len(),
            required, "insufficient data for analysis"
        );
        return None;
    }
    if !is_valid_series(bars) {
        warn!("rejecting bar series: non-monotonic timestamps or non-finite fields");
        return None;
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();

    let periods = &config.periods;
    let macd = calculate_macd(
        &closes,
        periods.macd_fast,
        periods.macd_slow,
        periods.macd_signal,
    );
    let cross = calculate_ema_cross(&closes, periods.ema_short, periods.ema_long);
    let rsi = calculate_rsi(&closes, periods.rsi);
    let stoch = calculate_stochastic(bars, periods.stoch_k, periods.stoch_d);
    let bands = calculate_bollinger(&closes, periods.bollinger, periods.bollinger_width);
    let atr = calculate_atr(bars, periods.atr);
    let obv = calculate_obv(bars);
    let volume_avg = calculate_volume_sma(bars, periods.volume);

    let last_bar = bars.last()?;
    let (ema_short, ema_long) = cross.latest()?;
    let values = SnapshotValues {
        close: round_to(last_bar.close, 4),
        rsi: latest(&rsi).map(|v| round_to(v, 2)),
        macd: round_to(*macd.macd_line.last()?, 4),
        macd_signal: round_to(*macd.signal_line.last()?, 4),
        macd_hist: round_to(*macd.histogram.last()?, 4),
        ema_short: round_to(ema_short, 4),
        ema_long: round_to(ema_long, 4),
        bb_upper: round_to(latest(&bands.upper)?, 4),
        bb_mid: round_to(latest(&bands.middle)?, 4),
        bb_lower: round_to(latest(&bands.lower)?, 4),
        stoch_k: latest(&stoch.k).map(|v| round_to(v, 2)),
        stoch_d: latest(&stoch.d).map(|v| round_to(v, 2)),
        atr: round_to(*atr.last()?, 4),
        volume: last_bar.volume.round() as i64,
        volume_avg: latest(&volume_avg)?.round() as i64,
    };

    let interp = interpret(&values, &config.thresholds);
    let (score, signal) = composite_signal(&values, &config.thresholds);

    debug!(score, signal = %signal, "analysis complete");

    Some(AnalysisReport {
        values,
        interp,
        score,
        signal,
        series: SeriesBundle {
            macd_line: lift(macd.macd_line),
            signal_line: lift(macd.signal_line),
            histogram: lift(macd.histogram),
            ema_short: lift(cross.short),
            ema_long: lift(cross.long),
            rsi,
            bb_upper: bands.upper,
            bb_mid: bands.middle,
            bb_lower: bands.lower,
            stoch_k: stoch.k,
            stoch_d: stoch.d,
            atr: lift(atr),
            obv: lift(obv),
            volume_avg,
        },
    })
}

/// Round to a fixed number of decimal places.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Value at the final index of a tagged series.
fn latest(series: &[Option<f64>]) -> Option<f64> {
    series.last().copied().flatten()
}

/// Lift a dense series into the tagged representation of the output bundle.
fn lift(series: Vec<f64>) -> Vec<Option<f64>> {
    series.into_iter().map(Some).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AnalysisConfig {
        AnalysisConfig::default()
    }

    fn bar(ts: i64, high: f64, low: f64, close: f64, volume: f64) -> Bar {
        Bar {
            timestamp: ts,
            open: close,
            high,
            low,
            close,
            volume,
        }
    }

    /// Scenario A: 40 bars rising in unit steps, high = low = close.
    fn rising_bars() -> Vec<Bar> {
        (0..40)
            .map(|i| {
                let c = 100.0 + i as f64;
                bar(i as i64, c, c, c, 1000.0)
            })
            .collect()
    }

    /// Scenario B: the mirrored strictly decreasing series.
    fn falling_bars() -> Vec<Bar> {
        (0..40)
            .map(|i| {
                let c = 139.0 - i as f64;
                bar(i as i64, c, c, c, 1000.0)
            })
            .collect()
    }

    /// Scenario C: a flat series.
    fn flat_bars() -> Vec<Bar> {
        (0..40).map(|i| bar(i as i64, 100.0, 100.0, 100.0, 1000.0)).collect()
    }

    // ---- input gating ----------------------------------------------------

    #[test]
    fn short_input_yields_empty_result() {
        let bars = rising_bars();
        assert!(analyze(&bars[..29], &config()).is_none());
        assert!(analyze(&[], &config()).is_none());
    }

    #[test]
    fn minimum_length_input_is_accepted() {
        let bars = rising_bars();
        assert!(analyze(&bars[..30], &config()).is_some());
    }

    #[test]
    fn non_monotonic_timestamps_rejected() {
        let mut bars = rising_bars();
        bars[20].timestamp = 0;
        assert!(analyze(&bars, &config()).is_none());
    }

    #[test]
    fn non_finite_field_rejected() {
        let mut bars = rising_bars();
        bars[5].low = f64::NAN;
        assert!(analyze(&bars, &config()).is_none());
    }

    // ---- scenario A: strict uptrend --------------------------------------

    #[test]
    fn uptrend_signals_buy() {
        let report = analyze(&rising_bars(), &config()).unwrap();

        assert!(report.values.ema_short > report.values.ema_long);
        assert!(report.values.macd > report.values.macd_signal);
        assert!(report.values.macd_hist > 0.0);
        assert_eq!(report.interp.macd.label, "BULLISH");
        assert_eq!(report.interp.ema_cross.label, "BULLISH");

        // Pure uptrend: no losses, so the RSI reading is undefined and its
        // vote abstains; the two trend votes carry the score.
        assert!(report.values.rsi.is_none());
        assert_eq!(report.interp.rsi.label, "INDETERMINATE");
        assert!(report.score == 2 || report.score == 3);
        assert_eq!(report.signal, Signal::Buy);
    }

    // ---- scenario B: strict downtrend ------------------------------------

    #[test]
    fn downtrend_signals_sell() {
        let report = analyze(&falling_bars(), &config()).unwrap();

        assert!(report.values.ema_short < report.values.ema_long);
        assert!(report.values.macd < report.values.macd_signal);
        assert_eq!(report.interp.macd.label, "BEARISH");
        assert_eq!(report.interp.ema_cross.label, "BEARISH");

        assert!(report.values.rsi.is_none());
        assert!(report.score == -2 || report.score == -3);
        assert_eq!(report.signal, Signal::Sell);
    }

    // ---- scenario C: flat series -----------------------------------------

    #[test]
    fn flat_series_reports_undefined_sentinels() {
        let report = analyze(&flat_bars(), &config()).unwrap();

        // Zero-range windows: stochastic and RSI are undefined, the Bollinger
        // bands collapse to the close.
        assert!(report.values.rsi.is_none());
        assert!(report.values.stoch_k.is_none());
        assert!(report.values.stoch_d.is_none());
        assert_eq!(report.values.bb_upper, report.values.bb_lower);
        assert_eq!(report.interp.stoch.label, "INDETERMINATE");
        assert_eq!(report.interp.bb.label, "INDETERMINATE");

        // Nothing in the output may be NaN; undefined slots serialize as null.
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("NaN"));
        assert!(report.values.atr == 0.0);
    }

    // ---- output completeness ---------------------------------------------

    #[test]
    fn series_bundle_is_aligned_with_input() {
        let bars = rising_bars();
        let report = analyze(&bars, &config()).unwrap();
        let n = bars.len();
        let series = &report.series;

        for (name, s) in [
            ("macd_line", &series.macd_line),
            ("signal_line", &series.signal_line),
            ("histogram", &series.histogram),
            ("ema_short", &series.ema_short),
            ("ema_long", &series.ema_long),
            ("rsi", &series.rsi),
            ("bb_upper", &series.bb_upper),
            ("bb_mid", &series.bb_mid),
            ("bb_lower", &series.bb_lower),
            ("stoch_k", &series.stoch_k),
            ("stoch_d", &series.stoch_d),
            ("atr", &series.atr),
            ("obv", &series.obv),
            ("volume_avg", &series.volume_avg),
        ] {
            assert_eq!(s.len(), n, "series {name} not aligned");
        }
    }

    #[test]
    fn report_serializes_with_full_key_set() {
        let report = analyze(&rising_bars(), &config()).unwrap();
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();

        for key in [
            "close",
            "rsi",
            "macd",
            "macd_signal",
            "macd_hist",
            "ema_short",
            "ema_long",
            "bb_upper",
            "bb_mid",
            "bb_lower",
            "stoch_k",
            "stoch_d",
            "atr",
            "volume",
            "volume_avg",
        ] {
            assert!(
                json["values"].get(key).is_some(),
                "snapshot missing key {key}"
            );
        }
        for key in ["rsi", "macd", "ema_cross", "bb", "stoch", "volume"] {
            assert!(
                json["interp"].get(key).is_some(),
                "interpretation missing key {key}"
            );
        }
        assert!(json["score"].is_i64());
        assert_eq!(json["signal"], "BUY");
    }

    // ---- rounding --------------------------------------------------------

    #[test]
    fn snapshot_rounding_precision() {
        let bars: Vec<Bar> = (0..40)
            .map(|i| {
                let c = 100.123456 + (i as f64 * 0.7).sin();
                bar(i as i64, c + 0.5, c - 0.5, c, 1234.567)
            })
            .collect();
        let report = analyze(&bars, &config()).unwrap();
        let values = &report.values;

        let is_rounded = |v: f64, decimals: i32| {
            let factor = 10f64.powi(decimals);
            ((v * factor).round() / factor - v).abs() < 1e-9
        };
        assert!(is_rounded(values.close, 4));
        assert!(is_rounded(values.macd, 4));
        assert!(is_rounded(values.atr, 4));
        if let Some(r) = values.rsi {
            assert!(is_rounded(r, 2));
        }
        if let Some(k) = values.stoch_k {
            assert!(is_rounded(k, 2));
        }
        assert_eq!(values.volume, 1235);
    }

    // ---- determinism -----------------------------------------------------

    #[test]
    fn analysis_is_deterministic() {
        let bars: Vec<Bar> = (0..60)
            .map(|i| {
                let c = 100.0 + (i as f64 * 0.37).sin() * 8.0;
                bar(i as i64, c + 1.0, c - 1.0, c, 1000.0 + (i % 7) as f64 * 250.0)
            })
            .collect();
        let first = analyze(&bars, &config()).unwrap();
        let second = analyze(&bars, &config()).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    // ---- composite range -------------------------------------------------

    #[test]
    fn score_always_in_range() {
        // A few differently shaped series; the score must stay in [-3, 3]
        // and the signal mapping must hold.
        let shapes: Vec<Vec<Bar>> = vec![
            rising_bars(),
            falling_bars(),
            flat_bars(),
            (0..50)
                .map(|i| {
                    let c = 100.0 + (i as f64 * 1.3).sin() * 10.0;
                    bar(i as i64, c + 2.0, c - 2.0, c, 500.0 + i as f64)
                })
                .collect(),
        ];
        for bars in shapes {
            let report = analyze(&bars, &config()).unwrap();
            assert!((-3..=3).contains(&report.score));
            match report.signal {
                Signal::Buy => assert!(report.score >= 2),
                Signal::Sell => assert!(report.score <= -2),
                Signal::Hold => assert!((-1..=1).contains(&report.score)),
            }
        }
    }
}
