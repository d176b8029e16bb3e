use anyhow::Result;
use clap::Parser;
use ngram_gap::{cli::Cli, pipeline};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Log filter: `--debug`/`--quiet` win, then `RUST_LOG`, then `info`
fn log_filter(debug: bool, quiet: bool) -> EnvFilter {
    let level = if debug {
        Some(tracing::Level::TRACE)
    } else if quiet {
        Some(tracing::Level::WARN)
    } else {
        None
    };

    match level {
        Some(level) => EnvFilter::from_default_env().add_directive(level.into()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    }
}

/// Initialize tracing subscriber for progress and debug output
fn init_tracing(debug: bool, quiet: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(debug, quiet))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug, args.quiet);

    let config = args.run_config()?;
    let summary = pipeline::run(&config)?;

    tracing::info!(
        "Done! Wrote {} of {} unique ngrams{}.",
        summary.rows_written,
        summary.unique_ngrams,
        if summary.truncated { " (truncated)" } else { "" }
    );

    Ok(())
}
