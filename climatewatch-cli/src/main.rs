//! Binary crate for the `climatewatch` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Loading observation files and sample conditions
//! - Human-friendly output formatting

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod input;
mod render;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `--json` output on stdout stays parseable.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cmd = cli::Cli::parse();
    cmd.run()
}
