use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;

use vitalscreen_app::config::AppConfig;

/// Load an application configuration from a JSON file.
pub fn load_app_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: AppConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Resolve the effective configuration from the optional file argument.
pub fn resolve(matches: &ArgMatches) -> Result<AppConfig> {
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        log::info!("[VitalScreen] Using config: {:?}", path);
        load_app_config(path)
    } else {
        log::info!("[VitalScreen] No config provided; using defaults.");
        Ok(AppConfig::default())
    }
}
