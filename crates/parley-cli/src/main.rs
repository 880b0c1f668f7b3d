//! Parley CLI application
//!
//! Shows a question batch in the platform presenter and prints the
//! normalized answers on stdout. Logs go to stderr so stdout stays a clean
//! JSON channel for the calling agent.
//!
//! ```bash
//! parley ask questions.json
//! echo '{"questions": [...]}' | parley ask -
//! RUST_LOG=parley_core=debug parley ask questions.json
//! ```

mod args;
mod commands;
mod router;

use anyhow::Result;
use clap::Parser;
use parley_core::LoggingConfig;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::args::Cli;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = router::load_config(&cli)?;

    init_logging(&config.logging, cli.verbose);

    router::route(cli, config).await
}

/// Install the stderr subscriber. `RUST_LOG` wins over the configured level.
fn init_logging(logging: &LoggingConfig, verbose: bool) {
    let default_level = if verbose { "debug" } else { logging.level.as_str() };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match logging.format.as_str() {
        "json" => builder.json().init(),
        "pretty" => builder.pretty().init(),
        _ => builder.compact().init(),
    }
}
