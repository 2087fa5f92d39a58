//! Meridian — the technical-indicator core of a short-term trading assistant.
//!
//! Given a time-ordered OHLCV bar series, [`analyze`] derives a fixed bank of
//! trend, momentum, volatility, and volume indicators, classifies the latest
//! readings, and reduces three of them to a single composite BUY/SELL/HOLD
//! signal.  The pipeline is a pure function of its input: no network, disk,
//! or retained state, so independent invocations may run in parallel without
//! synchronization.
//!
//! Values that are mathematically undefined at an index (warm-up windows,
//! zero-range denominators, one-sided markets) are carried as `None` rather
//! than NaN, and the interpreter reports them as indeterminate.

pub mod analysis;
pub mod bar;
pub mod config;
pub mod indicators;
pub mod interpret;
pub mod score;
pub mod series;

pub use analysis::{analyze, AnalysisReport, SeriesBundle, SnapshotValues};
pub use bar::Bar;
pub use config::{AnalysisConfig, IndicatorPeriods, SignalThresholds};
pub use interpret::{Interpretations, Reading};
pub use score::Signal;
