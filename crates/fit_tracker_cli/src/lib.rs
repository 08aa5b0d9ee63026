//! Line-oriented front end for `fit_tracker_core`.
//!
//! Reads one record per line and writes one summary per record, either as
//! text or as one JSON object per line.

use std::io::{BufRead, Write};

use clap::{Parser, ValueEnum};
use fit_tracker_core::{
    ActivityLabels, Biometrics, TrainingOutcome, evaluate_daily, evaluate_training,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// `<steps>,<duration>` step-counter records
    Daily,
    /// `<steps>,<label>,<duration>` training records
    #[default]
    Training,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Parser)]
#[command(
    name = "fit-tracker",
    about = "Summarize step and training records read from stdin"
)]
pub struct Options {
    /// Record format of the input lines
    #[arg(value_enum, default_value_t = Mode::Training)]
    pub mode: Mode,

    /// Emit one JSON object per record instead of text
    #[arg(long)]
    pub json: bool,
}

/// Counters reported once the input is exhausted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub processed: usize,
    pub rejected: usize,
}

/// Resolve the log level: `FIT_TRACKER_LOG_LEVEL`, then `RUST_LOG`, then `info`.
pub fn log_level<F>(mut get: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    get("FIT_TRACKER_LOG_LEVEL")
        .or_else(|| get("RUST_LOG"))
        .unwrap_or_else(|| "info".to_string())
}

/// Tracing filter for the configured level; an unparseable directive falls
/// back to `info`.
pub fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_new(level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
}

pub fn run<R, W>(
    input: R,
    output: &mut W,
    options: &Options,
    profile: &Biometrics,
    labels: &ActivityLabels,
) -> anyhow::Result<RunStats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = RunStats::default();
    for (index, raw) in input.split(b'\n').enumerate() {
        let raw = raw?;
        let line_no = index + 1;
        let line = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(err) => {
                stats.processed += 1;
                stats.rejected += 1;
                tracing::warn!(line = line_no, error = %err, "record is not valid UTF-8");
                if options.json {
                    let value = serde_json::json!({ "error": format!("invalid UTF-8: {err}") });
                    writeln!(output, "{value}")?;
                }
                continue;
            }
        };
        let record = line.trim_end_matches('\r');
        if record.trim().is_empty() {
            continue;
        }
        stats.processed += 1;

        match options.mode {
            Mode::Daily => match evaluate_daily(record, profile) {
                Ok(report) if options.json => {
                    writeln!(output, "{}", serde_json::to_string(&report)?)?;
                }
                Ok(report) => write!(output, "{report}")?,
                Err(err) => {
                    stats.rejected += 1;
                    tracing::warn!(line = line_no, error = %err, "failed to parse step record");
                    if options.json {
                        let value = serde_json::json!({ "error": err.to_string() });
                        writeln!(output, "{value}")?;
                    }
                }
            },
            Mode::Training => {
                let outcome = evaluate_training(record, profile, labels);
                if let TrainingOutcome::Invalid { error } = &outcome {
                    stats.rejected += 1;
                    tracing::warn!(line = line_no, error = %error, "failed to parse training record");
                }
                if options.json {
                    writeln!(output, "{}", serde_json::to_string(&outcome)?)?;
                } else {
                    write!(output, "{outcome}")?;
                }
            }
        }
    }
    Ok(stats)
}
