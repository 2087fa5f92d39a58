// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the indicator bank.  Every series
// is aligned index-for-index with the input bars; positions where a value is
// mathematically undefined (warm-up, zero-range window, one-sided market)
// hold `None` so callers are forced to handle them instead of propagating
// NaN through arithmetic.

pub mod atr;
pub mod bollinger;
pub mod ema_cross;
pub mod macd;
pub mod rsi;
pub mod stochastic;
pub mod volume;

pub use atr::calculate_atr;
pub use bollinger::{calculate_bollinger, BollingerSeries};
pub use ema_cross::{calculate_ema_cross, EmaCrossSeries};
pub use macd::{calculate_macd, MacdSeries};
pub use rsi::calculate_rsi;
pub use stochastic::{calculate_stochastic, StochasticSeries};
pub use volume::{calculate_obv, calculate_volume_sma};
