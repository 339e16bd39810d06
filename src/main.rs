//! dumpcut CLI entry point.

use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dumpcut::cli::Args;
use dumpcut::filter::StreamFilter;
use dumpcut::io::ensure_piped_stdin;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Set up logging; stdout carries the filtered dump, so logs go to stderr
    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with_writer(io::stderr)
        .init();

    // Both pre-flight checks run before any input is consumed
    let exclude = args.exclude_set()?;
    ensure_piped_stdin()?;

    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut filter = StreamFilter::new(&exclude);
    let stats = filter
        .run(stdin.lock(), BufWriter::new(stdout.lock()))
        .context("failed writing the filtered dump")?;

    tracing::info!(
        lines_read = stats.lines_read,
        lines_emitted = stats.lines_emitted,
        data_sections_skipped = stats.data_sections_skipped,
        "done"
    );

    Ok(())
}
