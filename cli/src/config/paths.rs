//! Platform-specific path utilities for hubfetch.

use std::path::PathBuf;

use crate::error::{HubfetchError, Result};

/// Get the configuration directory for hubfetch.
///
/// - Linux: `~/.config/hubfetch`
/// - macOS: `~/Library/Application Support/hubfetch`
/// - Windows: `%APPDATA%\hubfetch`
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| HubfetchError::Config("Cannot determine config directory".to_string()))?;
    Ok(base.join("hubfetch"))
}

/// Get the main configuration file path.
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
