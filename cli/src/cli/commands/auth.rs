//! Authentication command handlers.

use crate::auth::{KeyringStore, SecretStore, TokenAcquirer};
use crate::client::GitHubClient;
use crate::config::{load_config, token_override};
use crate::error::Result;

/// Handle `hubfetch auth login <repo>`.
///
/// Forces a fresh device flow by clearing the cached entry first, then lets
/// the acquirer's interactive tier run and cache the result.
pub async fn handle_login(repo: &str, no_browser: bool) -> Result<()> {
    let config = load_config()?;
    let client = GitHubClient::new(&config.api)?;

    let store = KeyringStore::new();
    store.delete(repo, &config.auth.account)?;

    let acquirer = TokenAcquirer::new(
        super::acquirer_config(&config, repo, None, no_browser),
        Box::new(store),
    );
    let token = acquirer.acquire(&client).await?;
    acquirer.cache_if_fresh(&token);

    println!();
    println!("Successfully authenticated; token cached for '{repo}'.");
    Ok(())
}

/// Handle `hubfetch auth logout <repo>`.
pub async fn handle_logout(repo: &str) -> Result<()> {
    let config = load_config()?;
    let store = KeyringStore::new();

    if store.get(repo, &config.auth.account)?.is_some() {
        store.delete(repo, &config.auth.account)?;
        println!("Removed cached token for '{repo}'.");
    } else {
        println!("No cached token for '{repo}'.");
    }

    Ok(())
}

/// Handle `hubfetch auth status <repo>`.
pub async fn handle_status(repo: &str) -> Result<()> {
    let config = load_config()?;

    if token_override().is_some() {
        println!("Token source: environment override");
        return Ok(());
    }

    let store = KeyringStore::new();
    if store.get(repo, &config.auth.account)?.is_some() {
        println!("Token source: keyring cache (service '{repo}')");
    } else {
        println!("Not authenticated for '{repo}'.");
        println!();
        println!("Run 'hubfetch auth login {repo}' to authenticate.");
    }

    Ok(())
}
