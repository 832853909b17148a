pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::AppConfig;

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("emojiform")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_from(&config_path())
}

/// Load configuration from an explicit path. A missing file yields defaults;
/// the file is never created or written back.
pub fn load_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config file")?;
    Ok(config)
}
