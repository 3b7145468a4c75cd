//! Application configuration settings.

use serde::{Deserialize, Serialize};
use url::Url;

/// Default GitHub OAuth client ID for hubfetch.
/// This should be replaced with your actual GitHub OAuth App client ID.
const DEFAULT_CLIENT_ID: &str = "Ov23liXXXXXXXXXXXXXX";

/// Main configuration for hubfetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HubfetchConfig {
    /// Authentication settings.
    pub auth: AuthSettings,
    /// API client settings.
    pub api: ApiConfig,
}

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    /// OAuth App client ID used for the device flow.
    pub client_id: String,
    /// OAuth scope requested by the device flow.
    pub scope: String,
    /// Account identifier for keyring entries.
    pub account: String,
    /// Device-flow polling settings.
    pub poll: PollSettings,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            client_id: DEFAULT_CLIENT_ID.to_string(),
            scope: "repo".to_string(),
            account: "hubfetch".to_string(),
            poll: PollSettings::default(),
        }
    }
}

/// Device-flow polling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollSettings {
    /// Interval used when the server does not suggest one, in seconds.
    pub fallback_interval_secs: u64,
    /// Maximum token-exchange polls before abandoning the flow.
    pub max_attempts: u32,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            fallback_interval_secs: 5,
            max_attempts: 120,
        }
    }
}

/// API client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// REST API base URL.
    #[serde(with = "url_serde")]
    pub base_url: Url,
    /// OAuth endpoints base URL.
    #[serde(with = "url_serde")]
    pub oauth_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://api.github.com").expect("valid default URL"),
            oauth_url: Url::parse("https://github.com").expect("valid default URL"),
            timeout_secs: 30,
        }
    }
}

/// Custom serde module for URL serialization.
mod url_serde {
    use serde::{self, Deserialize, Deserializer, Serializer};
    use url::Url;

    pub fn serialize<S>(url: &Url, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(url.as_str())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Url, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Url::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Environment variables that can override configuration.
pub mod env {
    /// Token override, highest-precedence acquisition tier.
    pub const TOKEN: &str = "HUBFETCH_TOKEN";
    /// Conventional fallback for the token override.
    pub const TOKEN_FALLBACK: &str = "GITHUB_TOKEN";
    pub const API_URL: &str = "HUBFETCH_API_URL";
    pub const OAUTH_URL: &str = "HUBFETCH_OAUTH_URL";
    pub const CLIENT_ID: &str = "HUBFETCH_CLIENT_ID";
    pub const LOG_LEVEL: &str = "HUBFETCH_LOG";
}

impl HubfetchConfig {
    /// Apply environment variable overrides to the configuration.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(env::API_URL) {
            if let Ok(parsed) = Url::parse(&url) {
                self.api.base_url = parsed;
            }
        }

        if let Ok(url) = std::env::var(env::OAUTH_URL) {
            if let Ok(parsed) = Url::parse(&url) {
                self.api.oauth_url = parsed;
            }
        }

        if let Ok(client_id) = std::env::var(env::CLIENT_ID) {
            if !client_id.is_empty() {
                self.auth.client_id = client_id;
            }
        }

        self
    }
}

/// Read the token override from the environment, once, at startup.
///
/// `HUBFETCH_TOKEN` wins over `GITHUB_TOKEN`; an empty value counts as absent.
#[must_use]
pub fn token_override() -> Option<String> {
    std::env::var(env::TOKEN)
        .or_else(|_| std::env::var(env::TOKEN_FALLBACK))
        .ok()
        .filter(|t| !t.is_empty())
}
