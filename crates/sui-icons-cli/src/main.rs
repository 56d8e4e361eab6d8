//! `sui-icons` entry point.

use anyhow::Result;
use clap::Parser;
use sui_icons_cli::{Cli, run};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log to stderr so lookup output on stdout stays pipeable.
fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sui_icons={level},sui_icons_cli={level}")));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .without_time(),
        )
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let stdout = std::io::stdout();
    run(&cli, &mut stdout.lock())
}
