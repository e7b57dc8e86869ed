// testcat/src/main.rs

mod cli;

use clap::Parser;
use std::io::IsTerminal;
use testcat_core::infrastructure::config::{CI_MARKER_ENV, ci_marker_present};
use testcat_core::run_flatten;

use crate::cli::Cli;

fn main() -> miette::Result<()> {
    // Guard against accidental local runs, before any argument handling
    if !ci_marker_present() {
        eprintln!(
            "This tool is intended to be run by GitHub Actions ({} is not set).",
            CI_MARKER_ENV
        );
        std::process::exit(1);
    }

    // Debug-level progress goes to stderr; stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();
    let config = cli.into_config();

    // Errors convert into miette reports and exit non-zero
    run_flatten(&config)?;

    Ok(())
}
