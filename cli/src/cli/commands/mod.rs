//! Command implementations.

pub mod asset;
pub mod auth;
pub mod file;

pub use asset::handle_asset;
pub use auth::{handle_login, handle_logout, handle_status};
pub use file::handle_file;

use std::time::Duration;

use crate::auth::AcquirerConfig;
use crate::config::HubfetchConfig;

/// Resolve the acquirer configuration for a target repository.
///
/// All ambient inputs (environment override, config file values) are folded
/// in here, once, before the acquirer runs.
pub(crate) fn acquirer_config(
    config: &HubfetchConfig,
    repo: &str,
    override_token: Option<String>,
    no_browser: bool,
) -> AcquirerConfig {
    AcquirerConfig {
        override_token,
        service: repo.to_string(),
        account: config.auth.account.clone(),
        client_id: config.auth.client_id.clone(),
        scope: config.auth.scope.clone(),
        fallback_interval: Duration::from_secs(config.auth.poll.fallback_interval_secs),
        max_poll_attempts: config.auth.poll.max_attempts,
        open_browser: !no_browser,
    }
}
