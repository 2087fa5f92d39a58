// =============================================================================
// Composite Scorer — three-vote directional signal
// =============================================================================
//
// Exactly three indicators vote; Bollinger, stochastic, volume, and ATR are
// deliberately excluded:
//
//   RSI           +1 below `rsi_vote_low`, -1 above `rsi_vote_high`, else 0.
//                 An undefined RSI abstains (votes 0).
//   MACD          +1 when the line is above its signal, else -1 (binary).
//   EMA crossover +1 when the short leg is above the long leg, else -1.
//
// Score = sum of votes, in [-3, 3].  BUY at or above `buy_score`, SELL at or
// below `sell_score`, HOLD between.
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::analysis::SnapshotValues;
use crate::config::SignalThresholds;

/// Tri-state directional signal derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
            Self::Hold => write!(f, "HOLD"),
        }
    }
}

/// Compute the composite score and signal from the latest snapshot.
pub fn composite_signal(values: &SnapshotValues, thresholds: &SignalThresholds) -> (i32, Signal) {
    let mut score = 0;

    match values.rsi {
        Some(r) if r < thresholds.rsi_vote_low => score += 1,
        Some(r) if r > thresholds.rsi_vote_high => score -= 1,
        _ => {}
    }

    score += if values.macd > values.macd_signal { 1 } else { -1 };
    score += if values.ema_short > values.ema_long { 1 } else { -1 };

    let signal = if score >= thresholds.buy_score {
        Signal::Buy
    } else if score <= thresholds.sell_score {
        Signal::Sell
    } else {
        Signal::Hold
    };

    (score, signal)
}
