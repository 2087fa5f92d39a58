// =============================================================================
// meridian — one-shot analysis over a JSON bar series
// =============================================================================
//
// Reads a JSON array of OHLCV bars from the file given as the first argument
// (or from stdin when no argument is given), runs the analysis pipeline, and
// prints the report as pretty JSON on stdout.
//
// Environment:
//   RUST_LOG          log filter (default "info")
//   MERIDIAN_CONFIG   path to a JSON config file overriding the defaults
// =============================================================================

use std::io::Read;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::info;
use tracing_subscriber::EnvFilter;

use meridian::{analyze, AnalysisConfig, Bar};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::var("MERIDIAN_CONFIG") {
        Ok(path) => AnalysisConfig::load(&path)?,
        Err(_) => AnalysisConfig::default(),
    };

    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read input file {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read bars from stdin")?;
            buf
        }
    };

    let bars: Vec<Bar> =
        serde_json::from_str(&input).context("failed to parse input as a JSON array of bars")?;

    if let (Some(first), Some(last)) = (bars.first(), bars.last()) {
        info!(
            bars = bars.len(),
            from = %format_timestamp(first.timestamp),
            to = %format_timestamp(last.timestamp),
            "loaded input series"
        );
    }

    let report = analyze(&bars, &config).with_context(|| {
        format!(
            "insufficient data: need at least {} valid bars, got {}",
            config.required_bars(),
            bars.len()
        )
    })?;

    info!(score = report.score, signal = %report.signal, "analysis complete");
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Render an epoch-millisecond timestamp for the log line; falls back to the
/// raw number when it is outside the representable range.
fn format_timestamp(ts: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(ts)
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| ts.to_string())
}
