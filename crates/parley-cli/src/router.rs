//! Command routing and configuration layering for the CLI

use anyhow::{Context, Result};
use parley_core::ParleyConfig;
use std::process::ExitCode;

use crate::args::{Cli, Commands};
use crate::commands;

/// Defaults < config file < `PARLEY_*` environment < command-line flags
pub fn load_config(cli: &Cli) -> Result<ParleyConfig> {
    let mut config = parley_core::config::load_config(cli.config_file.as_deref())
        .context("Failed to load configuration")?;
    apply_cli_overrides(&mut config, cli);
    Ok(config)
}

fn apply_cli_overrides(config: &mut ParleyConfig, cli: &Cli) {
    if let Some(presenter) = &cli.presenter {
        config.presenter_path = Some(presenter.clone());
    }
    if let Some(bin_dir) = &cli.bin_dir {
        config.bin_dir = Some(bin_dir.clone());
    }
    if cli.no_sound {
        config.notification.enabled = false;
    }
}

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli, config: ParleyConfig) -> Result<ExitCode> {
    match cli.command {
        Commands::Ask { input } => commands::ask::run(&input, config).await,
        Commands::Platform => commands::platform::show(&config),
        Commands::Schema => commands::schema::show(config),
    }
}
