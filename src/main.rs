mod cli;
mod config;
mod dedup;
mod error;
mod extractor;
mod locator;
mod metadata;
mod processor;
mod walker;
mod writer;
mod writers;

#[cfg(test)]
mod test_support;

use crate::config::AppConfig;
use crate::processor::ProcessSummary;
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::Path;

/// Scans the configured directory and writes every unique location to the output file.
fn run(config: &AppConfig) -> Result<ProcessSummary> {
    let directory = Path::new(&config.pictures_directory);
    let output = config.resolved_output_path();

    let mut writer = writer::open_writer(config)
        .with_context(|| format!("Cannot create output file {}", output.display()))?;

    let summary = processor::process(directory, |entry| writer.write_entry(entry))
        .with_context(|| format!("Processing {} failed", directory.display()))?;

    writer
        .finish()
        .with_context(|| format!("Cannot write output file {}", output.display()))?;

    Ok(summary)
}

fn main() -> Result<()> {
    let args = cli::Args::parse();
    let config = AppConfig::load(args.overrides())?;

    // Initialize env_logger based on config.log_level; it writes to stderr
    env_logger::Builder::new()
        .filter_level(config.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .init();

    info!("Starting geotag_export");

    let summary = run(&config)?;

    info!(
        "Scanned {} entries: {} without metadata, {} unreadable, {} located, {} duplicates, {} written to {}",
        summary.scanned,
        summary.no_metadata,
        summary.unreadable,
        summary.located,
        summary.duplicates,
        summary.emitted,
        config.resolved_output_path().display()
    );

    Ok(())
}
