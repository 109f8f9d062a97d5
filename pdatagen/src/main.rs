mod commands;
mod ops;
mod reports;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    // Diagnostics go to stderr so `--dry-run` output stays clean.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    Cli::parse().run()
}
