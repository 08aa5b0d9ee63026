use std::io::{self, BufWriter, Write};

use clap::Parser;
use fit_tracker_cli::{Options, env_filter, log_level, run};
use fit_tracker_core::{ActivityLabels, Biometrics};

fn main() -> anyhow::Result<()> {
    // Configure logging from env var `FIT_TRACKER_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = log_level(|k| std::env::var(k).ok());
    tracing_subscriber::fmt()
        .compact()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter(&log_env))
        .init();
    tracing::debug!("fit-tracker: log filter: {}", log_env);

    let options = Options::parse();
    let profile = Biometrics::from_env()?;
    tracing::info!(
        mode = ?options.mode,
        weight_kg = profile.weight_kg,
        height_cm = profile.height_cm,
        "fit-tracker: reading records from stdin"
    );

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    let stats = run(
        stdin.lock(),
        &mut out,
        &options,
        &profile,
        &ActivityLabels::default(),
    )?;
    out.flush()?;

    tracing::info!(
        processed = stats.processed,
        rejected = stats.rejected,
        "fit-tracker: done"
    );
    Ok(())
}
