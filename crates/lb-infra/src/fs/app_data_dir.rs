use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR_NAME: &str = "Lobby";

/// Get the Lobby application data root directory.
///
/// # Platform-specific paths
/// - macOS: ~/Library/Application Support/Lobby
/// - Windows: %APPDATA%\Lobby
/// - Linux: $XDG_DATA_HOME/Lobby or ~/.local/share/Lobby
///
/// The directory is not created here; the caller decides when.
pub fn app_data_dir() -> Result<PathBuf> {
    let base_dir =
        platform_data_dir().context("Failed to get platform-specific data directory")?;

    Ok(base_dir.join(APP_DIR_NAME))
}

fn platform_data_dir() -> Result<PathBuf> {
    // XDG_DATA_HOME takes precedence on Linux.
    #[cfg(target_os = "linux")]
    if let Some(xdg_data_home) = std::env::var_os("XDG_DATA_HOME") {
        return Ok(PathBuf::from(xdg_data_home));
    }

    dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Unable to determine platform data directory"))
}
