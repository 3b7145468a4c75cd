//! OAuth device authorization flow implementation (RFC 8628).
//!
//! The flow moves through `Requesting -> Polling -> {Succeeded, Aborted}`.
//! Each poll of the token endpoint is classified into an explicit
//! [`PollOutcome`]; the loop self-loops on `Pending` and treats everything
//! else as terminal. The loop is bounded by a configurable attempt count.

use std::time::Duration;

use crate::client::GitHubClient;
use crate::error::{HubfetchError, Result};

/// An in-progress device authorization session.
pub struct DeviceAuthorization {
    /// Opaque code used only in token-exchange requests. Never displayed.
    pub device_code: String,
    /// Short code for the user to enter.
    pub user_code: String,
    /// URL for the user to visit.
    pub verification_uri: String,
    /// Polling interval, server-provided with a configured fallback.
    pub interval: Duration,
}

/// Outcome of a single token-exchange poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// User has not completed authorization yet; keep polling.
    Pending,
    /// Server asked us to back off; increase the interval and keep polling.
    SlowDown,
    /// Authorization complete; an access token was issued.
    Issued(String),
    /// User denied the authorization request.
    Denied,
    /// The device code expired before the user finished.
    Expired,
    /// Any other error reported by the token endpoint.
    Fatal(String),
}

impl PollOutcome {
    /// Classify a token-endpoint response body.
    #[must_use]
    pub fn from_response(body: &serde_json::Value) -> Self {
        if let Some(token) = body.get("access_token").and_then(serde_json::Value::as_str) {
            return Self::Issued(token.to_string());
        }

        match body.get("error").and_then(serde_json::Value::as_str) {
            Some("authorization_pending") => Self::Pending,
            Some("slow_down") => Self::SlowDown,
            Some("access_denied") => Self::Denied,
            Some("expired_token") => Self::Expired,
            Some(other) => Self::Fatal(other.to_string()),
            None => Self::Fatal(format!("unexpected token response: {body}")),
        }
    }
}

/// Start the device authorization flow.
///
/// Returns the verification URL and user code for the user to complete
/// authentication. The polling interval honors the server-suggested value,
/// falling back to `fallback_interval` when absent.
///
/// # Errors
///
/// Returns an error if the device-code request fails.
pub async fn start_device_flow(
    client: &GitHubClient,
    client_id: &str,
    scope: &str,
    fallback_interval: Duration,
) -> Result<DeviceAuthorization> {
    let response = client.request_device_code(client_id, scope).await?;

    let interval = response
        .interval
        .map_or(fallback_interval, Duration::from_secs);

    Ok(DeviceAuthorization {
        device_code: response.device_code,
        user_code: response.user_code,
        verification_uri: response.verification_uri,
        interval,
    })
}

/// Poll the token endpoint until authorization completes or a terminal
/// outcome is reached.
///
/// Sleeps the session interval before every attempt. A `slow_down` response
/// adds five seconds to the interval, per the GitHub device-flow contract.
///
/// # Errors
///
/// Returns an error if:
/// - the user denies access,
/// - the device code expires or `max_attempts` polls pass without a decision,
/// - the token endpoint reports any other failure.
pub async fn poll_for_token(
    client: &GitHubClient,
    client_id: &str,
    session: &DeviceAuthorization,
    max_attempts: u32,
) -> Result<String> {
    let mut interval = session.interval;

    for attempt in 1..=max_attempts {
        tokio::time::sleep(interval).await;

        let body = client
            .exchange_device_code(client_id, &session.device_code)
            .await?;

        match PollOutcome::from_response(&body) {
            PollOutcome::Pending => {
                tracing::debug!(attempt, "authorization pending");
            }
            PollOutcome::SlowDown => {
                interval += Duration::from_secs(5);
                tracing::debug!(attempt, interval_secs = interval.as_secs(), "server asked to slow down");
            }
            PollOutcome::Issued(token) => return Ok(token),
            PollOutcome::Denied => return Err(HubfetchError::AccessDenied),
            PollOutcome::Expired => return Err(HubfetchError::DeviceAuthorizationExpired),
            PollOutcome::Fatal(reason) => {
                return Err(HubfetchError::AuthenticationFailed(format!(
                    "token exchange failed: {reason}"
                )))
            }
        }
    }

    Err(HubfetchError::DeviceAuthorizationExpired)
}

/// Open the verification URL in the default browser.
///
/// Returns `true` if the browser was opened successfully.
pub fn open_browser(session: &DeviceAuthorization) -> bool {
    open::that(&session.verification_uri).is_ok()
}
