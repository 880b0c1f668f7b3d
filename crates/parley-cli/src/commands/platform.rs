//! Platform command: show how the presenter would be resolved

use anyhow::Result;
use parley_core::platform::{resolver_for_config, supported_platforms};
use parley_core::{ParleyConfig, ParleyResult, PlatformId};
use std::path::PathBuf;
use std::process::ExitCode;

/// Print the platform id, the presenter it resolves to and the supported set
pub fn show(config: &ParleyConfig) -> Result<ExitCode> {
    let platform = PlatformId::current();

    println!("platform:  {}", platform);
    match resolve(config, &platform) {
        Ok(path) => println!("presenter: {}", path.display()),
        Err(err) => println!("presenter: unavailable ({})", err),
    }
    println!("sound:     {}", if config.notification.enabled { "on" } else { "off" });
    println!(
        "supported: {}",
        supported_platforms().collect::<Vec<_>>().join(", ")
    );

    Ok(ExitCode::SUCCESS)
}

fn resolve(config: &ParleyConfig, platform: &PlatformId) -> ParleyResult<PathBuf> {
    resolver_for_config(config)?.resolve(platform)
}
