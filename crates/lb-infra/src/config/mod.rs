//! Configuration file loading

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

use lb_core::config::AppConfig;

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Load configuration from a TOML file. A missing file yields defaults.
pub async fn load_app_config(path: &Path) -> Result<AppConfig> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("read config failed: {}", path.display()))
        }
    };

    toml::from_str(&content).with_context(|| format!("parse config failed: {}", path.display()))
}
