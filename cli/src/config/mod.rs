//! Configuration management for hubfetch.

pub mod paths;
pub mod settings;

pub use paths::config_file;
pub use settings::{token_override, ApiConfig, AuthSettings, HubfetchConfig, PollSettings};

use std::path::Path;

use crate::error::{HubfetchError, Result};

/// Load configuration from the default config file.
///
/// If the config file doesn't exist, returns default configuration.
pub fn load_config() -> Result<HubfetchConfig> {
    let path = config_file()?;
    load_config_from(&path)
}

/// Load configuration from a specific path.
///
/// If the file doesn't exist, returns default configuration.
pub fn load_config_from(path: &Path) -> Result<HubfetchConfig> {
    if !path.exists() {
        return Ok(HubfetchConfig::default().with_env_overrides());
    }

    let contents = std::fs::read_to_string(path)?;
    let config: HubfetchConfig =
        toml::from_str(&contents).map_err(|e| HubfetchError::ConfigRead(e.to_string()))?;

    Ok(config.with_env_overrides())
}

/// Save configuration to a specific path.
pub fn save_config_to(config: &HubfetchConfig, path: &Path) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let contents =
        toml::to_string_pretty(config).map_err(|e| HubfetchError::ConfigWrite(e.to_string()))?;
    std::fs::write(path, contents)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.api.base_url.as_str(), "https://api.github.com/");
        assert_eq!(config.auth.poll.fallback_interval_secs, 5);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = HubfetchConfig::default();
        config.auth.scope = "repo read:org".to_string();
        config.auth.poll.max_attempts = 42;

        save_config_to(&config, &path).unwrap();
        let loaded = load_config_from(&path).unwrap();

        assert_eq!(loaded.auth.scope, "repo read:org");
        assert_eq!(loaded.auth.poll.max_attempts, 42);
    }

    #[test]
    fn malformed_toml_is_a_config_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is not toml [").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, HubfetchError::ConfigRead(_)));
    }
}
