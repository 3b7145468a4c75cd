//! Three-tier access token acquisition.
//!
//! Tiers are tried in strict order, first success wins:
//! 1. environment override,
//! 2. cached secret in the OS keyring,
//! 3. interactive device authorization flow.
//!
//! Caching a freshly issued token is a separate best-effort operation
//! ([`TokenAcquirer::cache_if_fresh`]) that can never alter the result of
//! [`TokenAcquirer::acquire`].

use std::time::Duration;

use crate::auth::device_flow;
use crate::auth::store::SecretStore;
use crate::auth::token::{Token, TokenProvenance};
use crate::client::GitHubClient;
use crate::error::Result;

/// Explicit configuration for token acquisition.
///
/// All ambient state (environment variables, defaults) is resolved into this
/// struct once at startup; the acquirer itself performs no global lookups.
#[derive(Debug, Clone)]
pub struct AcquirerConfig {
    /// Token override, read from the environment at startup. Highest precedence.
    pub override_token: Option<String>,
    /// Secret-store service identifier (the target repository name).
    pub service: String,
    /// Secret-store account identifier (fixed per tool install).
    pub account: String,
    /// OAuth app client ID for the device flow.
    pub client_id: String,
    /// OAuth scope requested by the device flow.
    pub scope: String,
    /// Polling interval used when the server does not suggest one.
    pub fallback_interval: Duration,
    /// Upper bound on token-exchange polls before the flow is abandoned.
    pub max_poll_attempts: u32,
    /// Whether to try opening the verification URL in a browser.
    pub open_browser: bool,
}

/// Produces a valid access token using the three-tier strategy.
pub struct TokenAcquirer {
    config: AcquirerConfig,
    store: Box<dyn SecretStore>,
}

impl TokenAcquirer {
    /// Creates an acquirer over the given secret store.
    #[must_use]
    pub fn new(config: AcquirerConfig, store: Box<dyn SecretStore>) -> Self {
        Self { config, store }
    }

    /// Acquire an access token.
    ///
    /// The environment tier performs no network or store calls; the cache
    /// tier performs a single store read; only when both miss does the
    /// interactive device flow run.
    ///
    /// # Errors
    ///
    /// Returns an authentication error when every tier is exhausted or the
    /// device flow is aborted.
    pub async fn acquire(&self, client: &GitHubClient) -> Result<Token> {
        if let Some(value) = self.config.override_token.as_deref() {
            if !value.is_empty() {
                tracing::debug!("using access token from environment override");
                return Ok(Token::new(value, TokenProvenance::Environment));
            }
        }

        // A store read failure falls through to the interactive tier; the
        // cache is an optimization, not a requirement.
        match self.store.get(&self.config.service, &self.config.account) {
            Ok(Some(secret)) => {
                tracing::debug!(service = %self.config.service, "using cached access token");
                return Ok(Token::new(secret, TokenProvenance::Cached));
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("credential store read failed: {e}"),
        }

        let value = self.interactive(client).await?;
        Ok(Token::new(value, TokenProvenance::FreshlyIssued))
    }

    /// Persist a freshly issued token to the secret store, best-effort.
    ///
    /// Tokens sourced from the environment or the cache are never rewritten.
    /// A store failure is logged as a warning and does not propagate.
    pub fn cache_if_fresh(&self, token: &Token) {
        if !token.is_fresh() {
            return;
        }

        match self
            .store
            .set(&self.config.service, &self.config.account, token.value())
        {
            Ok(()) => {
                tracing::debug!(service = %self.config.service, "cached freshly issued token");
            }
            Err(e) => tracing::warn!("failed to cache access token: {e}"),
        }
    }

    /// Run the interactive device flow: request a code, surface instructions,
    /// poll until a terminal outcome.
    async fn interactive(&self, client: &GitHubClient) -> Result<String> {
        let session = device_flow::start_device_flow(
            client,
            &self.config.client_id,
            &self.config.scope,
            self.config.fallback_interval,
        )
        .await?;

        // Instructions go to stdout, never through tracing, so log filters
        // cannot swallow the code.
        println!();
        println!("To authenticate, please visit:");
        println!();
        println!("  {}", session.verification_uri);
        println!();
        println!("And enter code: {}", session.user_code);
        println!();

        if self.config.open_browser {
            if device_flow::open_browser(&session) {
                println!("Browser opened automatically.");
            } else {
                println!("Could not open browser. Please visit the URL manually.");
            }
            println!();
        }

        println!("Waiting for authorization...");

        device_flow::poll_for_token(
            client,
            &self.config.client_id,
            &session,
            self.config.max_poll_attempts,
        )
        .await
    }
}
