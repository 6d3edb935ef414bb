//! Flight leg batch tool
//!
//! Reads newline-delimited JSON position reports, segments them into legs,
//! and prints one JSON summary per leg to stdout. Threshold filtering,
//! GeoJSON, and map rendering are downstream consumers of this output.

use std::fs::File;
use std::io::{self, BufReader, Write};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use adsb_legs::config::Config;
use adsb_legs::{engine, ingest};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env();

    // Positional argument overrides INPUT_PATH; "-" reads stdin
    let input_path = std::env::args()
        .nth(1)
        .or(config.input_path.clone())
        .filter(|p| p != "-");

    info!("Max gap: {} minutes", config.max_gap_min);

    let batch = match &input_path {
        Some(path) => {
            info!("Reading position reports from {}", path);
            let file = File::open(path).with_context(|| format!("failed to open {path}"))?;
            ingest::read_batch(BufReader::new(file))?
        }
        None => {
            info!("Reading position reports from stdin");
            ingest::read_batch(io::stdin().lock())?
        }
    };

    let report_count = batch.len();
    let summaries = engine::run(batch, config.max_gap_min)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for summary in &summaries {
        serde_json::to_writer(&mut out, summary)?;
        writeln!(out)?;
    }

    info!("{} reports reduced to {} flight legs", report_count, summaries.len());
    Ok(())
}
