//! Error types and result aliases for hubfetch.
//!
//! This module provides a comprehensive error handling system with:
//! - Specific error variants for different failure modes
//! - User-friendly error messages with recovery suggestions
//! - Helper methods for error classification
//! - Automatic conversion from common error types

use thiserror::Error;

use crate::fetch::FetchError;

/// Main error type for hubfetch operations.
///
/// Each variant includes a user-friendly message with actionable recovery steps.
/// Use [`requires_reauth`](Self::requires_reauth) and [`is_retriable`](Self::is_retriable)
/// to determine appropriate error handling strategies.
#[derive(Error, Debug)]
pub enum HubfetchError {
    /// OAuth token acquisition failed with every tier exhausted.
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// User denied the authorization request.
    #[error(
        "Authorization was denied. If this was unintentional, run 'hubfetch auth login' to try again."
    )]
    AccessDenied,

    /// Device authorization code expired before user completed authentication.
    #[error("Device authorization code expired. Please run 'hubfetch auth login' again and complete authorization within the time limit.")]
    DeviceAuthorizationExpired,

    /// API returned a non-success status code.
    #[error("API request failed ({status}): {message}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// API server is unreachable (503 or connection failed).
    #[error("GitHub is unavailable. Check your network connection or try again later.")]
    ApiUnavailable,

    /// Request timed out.
    #[error("Request timed out. The server may be slow or unreachable. Try again later.")]
    Timeout,

    /// Network error during HTTP request.
    #[error("Network error: {0}. Check your internet connection.")]
    Network(String),

    /// Failed to access the OS keyring.
    #[error("Failed to access credential storage: {0}. Ensure your system keyring is unlocked.")]
    CredentialStorage(String),

    /// General configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}. Check file permissions and format.")]
    ConfigRead(String),

    /// Failed to write configuration file.
    #[error("Failed to write configuration file: {0}. Check directory permissions.")]
    ConfigWrite(String),

    /// The post-download install command failed.
    #[error("Install command failed: {0}")]
    InstallFailed(String),

    /// IO operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON or TOML serialization/deserialization failed.
    #[error("Data serialization error: {0}. This may indicate corrupted data.")]
    Serialization(String),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// File or release-asset fetch error.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl HubfetchError {
    /// Checks if this error can be resolved by re-authenticating.
    ///
    /// Returns `true` for errors related to missing, denied, or expired authorization.
    /// Use this to determine when to prompt the user to run `hubfetch auth login`.
    #[must_use]
    pub const fn requires_reauth(&self) -> bool {
        matches!(
            self,
            Self::AuthenticationFailed(_) | Self::AccessDenied | Self::DeviceAuthorizationExpired
        )
    }

    /// Checks if this error is transient and the operation might succeed on retry.
    ///
    /// Returns `true` for network-related errors and service unavailability.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout | Self::ApiUnavailable)
    }
}

/// Result type alias using [`HubfetchError`].
pub type Result<T> = std::result::Result<T, HubfetchError>;

impl From<serde_json::Error> for HubfetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(format!("JSON error: {err}"))
    }
}

impl From<toml::de::Error> for HubfetchError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigRead(format!("TOML parse error: {err}"))
    }
}

impl From<toml::ser::Error> for HubfetchError {
    fn from(err: toml::ser::Error) -> Self {
        Self::ConfigWrite(format!("TOML serialize error: {err}"))
    }
}

impl From<keyring::Error> for HubfetchError {
    fn from(err: keyring::Error) -> Self {
        Self::CredentialStorage(err.to_string())
    }
}

impl From<reqwest::Error> for HubfetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::ApiUnavailable
        } else {
            Self::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_user_friendly() {
        let denied = HubfetchError::AccessDenied;
        assert!(denied.to_string().contains("hubfetch auth login"));

        let expired = HubfetchError::DeviceAuthorizationExpired;
        assert!(expired.to_string().contains("hubfetch auth login"));
    }

    #[test]
    fn api_error_includes_status_and_message() {
        let err = HubfetchError::ApiError {
            status: 404,
            message: "Not found".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("Not found"));
    }

    #[test]
    fn requires_reauth_identifies_auth_errors() {
        assert!(HubfetchError::AccessDenied.requires_reauth());
        assert!(HubfetchError::DeviceAuthorizationExpired.requires_reauth());
        assert!(HubfetchError::AuthenticationFailed("denied".to_string()).requires_reauth());

        assert!(!HubfetchError::Timeout.requires_reauth());
        assert!(!HubfetchError::ApiUnavailable.requires_reauth());
        assert!(!HubfetchError::Network("test".to_string()).requires_reauth());
    }

    #[test]
    fn is_retriable_identifies_transient_errors() {
        assert!(HubfetchError::Timeout.is_retriable());
        assert!(HubfetchError::ApiUnavailable.is_retriable());
        assert!(HubfetchError::Network("test".to_string()).is_retriable());

        assert!(!HubfetchError::AccessDenied.is_retriable());
        assert!(!HubfetchError::AuthenticationFailed("x".to_string()).is_retriable());
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
        let err: HubfetchError = json_err.into();
        assert!(matches!(err, HubfetchError::Serialization(_)));
    }

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: HubfetchError = io_err.into();
        assert!(matches!(err, HubfetchError::Io(_)));
    }

    #[test]
    fn from_url_parse_error() {
        let url_err = url::Url::parse("not a url").unwrap_err();
        let err: HubfetchError = url_err.into();
        assert!(matches!(err, HubfetchError::InvalidUrl(_)));
    }
}
