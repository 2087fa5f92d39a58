// =============================================================================
// Analysis Configuration — every tunable period and threshold in one place
// =============================================================================
//
// Central configuration for the analysis pipeline.  Every look-back period
// and classification/vote threshold lives here so that behaviour is
// reproducible and independently testable; nothing in the indicator,
// interpreter, or scorer code carries a bare numeric constant.
//
// All fields carry `#[serde(default)]` so that loading an older or partial
// config file never breaks.
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_min_bars() -> usize {
    30
}

fn default_macd_fast() -> usize {
    12
}

fn default_macd_slow() -> usize {
    26
}

fn default_macd_signal() -> usize {
    9
}

fn default_ema_short() -> usize {
    9
}

fn default_ema_long() -> usize {
    21
}

fn default_rsi_period() -> usize {
    14
}

fn default_stoch_k() -> usize {
    14
}

fn default_stoch_d() -> usize {
    3
}

fn default_bollinger_period() -> usize {
    20
}

fn default_bollinger_width() -> f64 {
    2.0
}

fn default_atr_period() -> usize {
    14
}

fn default_volume_period() -> usize {
    20
}

fn default_rsi_oversold() -> f64 {
    30.0
}

fn default_rsi_overbought() -> f64 {
    70.0
}

fn default_rsi_vote_low() -> f64 {
    35.0
}

fn default_rsi_vote_high() -> f64 {
    65.0
}

fn default_stoch_oversold() -> f64 {
    20.0
}

fn default_stoch_overbought() -> f64 {
    80.0
}

fn default_volume_high_ratio() -> f64 {
    1.5
}

fn default_volume_low_ratio() -> f64 {
    0.5
}

fn default_buy_score() -> i32 {
    2
}

fn default_sell_score() -> i32 {
    -2
}

// =============================================================================
// IndicatorPeriods
// =============================================================================

/// Look-back periods for every indicator in the bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorPeriods {
    /// MACD fast EMA span.
    #[serde(default = "default_macd_fast")]
    pub macd_fast: usize,

    /// MACD slow EMA span.
    #[serde(default = "default_macd_slow")]
    pub macd_slow: usize,

    /// MACD signal-line EMA span.
    #[serde(default = "default_macd_signal")]
    pub macd_signal: usize,

    /// Short leg of the EMA crossover.
    #[serde(default = "default_ema_short")]
    pub ema_short: usize,

    /// Long leg of the EMA crossover.
    #[serde(default = "default_ema_long")]
    pub ema_long: usize,

    /// RSI look-back (Wilder smoothing).
    #[serde(default = "default_rsi_period")]
    pub rsi: usize,

    /// Stochastic %K window.
    #[serde(default = "default_stoch_k")]
    pub stoch_k: usize,

    /// Stochastic %D smoothing window.
    #[serde(default = "default_stoch_d")]
    pub stoch_d: usize,

    /// Bollinger middle-band SMA window.
    #[serde(default = "default_bollinger_period")]
    pub bollinger: usize,

    /// Bollinger band width in standard deviations.
    #[serde(default = "default_bollinger_width")]
    pub bollinger_width: f64,

    /// ATR look-back (Wilder smoothing).
    #[serde(default = "default_atr_period")]
    pub atr: usize,

    /// Volume moving-average window.
    #[serde(default = "default_volume_period")]
    pub volume: usize,
}

impl Default for IndicatorPeriods {
    fn default() -> Self {
        Self {
            macd_fast: default_macd_fast(),
            macd_slow: default_macd_slow(),
            macd_signal: default_macd_signal(),
            ema_short: default_ema_short(),
            ema_long: default_ema_long(),
            rsi: default_rsi_period(),
            stoch_k: default_stoch_k(),
            stoch_d: default_stoch_d(),
            bollinger: default_bollinger_period(),
            bollinger_width: default_bollinger_width(),
            atr: default_atr_period(),
            volume: default_volume_period(),
        }
    }
}

// =============================================================================
// SignalThresholds
// =============================================================================

/// Classification and vote thresholds used by the interpreter and the
/// composite scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalThresholds {
    /// RSI below this reads as oversold.
    #[serde(default = "default_rsi_oversold")]
    pub rsi_oversold: f64,

    /// RSI above this reads as overbought.
    #[serde(default = "default_rsi_overbought")]
    pub rsi_overbought: f64,

    /// RSI below this contributes a +1 vote to the composite score.
    #[serde(default = "default_rsi_vote_low")]
    pub rsi_vote_low: f64,

    /// RSI above this contributes a -1 vote to the composite score.
    #[serde(default = "default_rsi_vote_high")]
    pub rsi_vote_high: f64,

    /// Both %K and %D below this reads as oversold.
    #[serde(default = "default_stoch_oversold")]
    pub stoch_oversold: f64,

    /// Both %K and %D above this reads as overbought.
    #[serde(default = "default_stoch_overbought")]
    pub stoch_overbought: f64,

    /// Volume above this multiple of its average reads as high conviction.
    #[serde(default = "default_volume_high_ratio")]
    pub volume_high_ratio: f64,

    /// Volume below this multiple of its average reads as low conviction.
    #[serde(default = "default_volume_low_ratio")]
    pub volume_low_ratio: f64,

    /// Composite score at or above this emits BUY.
    #[serde(default = "default_buy_score")]
    pub buy_score: i32,

    /// Composite score at or below this emits SELL.
    #[serde(default = "default_sell_score")]
    pub sell_score: i32,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            rsi_oversold: default_rsi_oversold(),
            rsi_overbought: default_rsi_overbought(),
            rsi_vote_low: default_rsi_vote_low(),
            rsi_vote_high: default_rsi_vote_high(),
            stoch_oversold: default_stoch_oversold(),
            stoch_overbought: default_stoch_overbought(),
            volume_high_ratio: default_volume_high_ratio(),
            volume_low_ratio: default_volume_low_ratio(),
            buy_score: default_buy_score(),
            sell_score: default_sell_score(),
        }
    }
}

// =============================================================================
// AnalysisConfig
// =============================================================================

/// Top-level pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Minimum number of bars required before any report is produced.
    #[serde(default = "default_min_bars")]
    pub min_bars: usize,

    #[serde(default)]
    pub periods: IndicatorPeriods,

    #[serde(default)]
    pub thresholds: SignalThresholds,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_bars: default_min_bars(),
            periods: IndicatorPeriods::default(),
            thresholds: SignalThresholds::default(),
        }
    }
}

impl AnalysisConfig {
    /// Load a config from a JSON file.  Missing fields fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// The number of bars needed so that every indicator's warm-up window is
    /// cleared at the final index.  `analyze` gates on the larger of this and
    /// `min_bars`, so a report never carries a warm-up hole in its snapshot.
    pub fn required_bars(&self) -> usize {
        let stoch_warmup = (self.periods.stoch_k + self.periods.stoch_d).saturating_sub(1);
        let warmup = self
            .periods
            .bollinger
            .max(self.periods.volume)
            .max(stoch_warmup)
            .max(self.periods.rsi + 1);
        self.min_bars.max(warmup)
    }
}
