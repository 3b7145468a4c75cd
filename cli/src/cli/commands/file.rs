//! The `hubfetch file` command.

use std::path::PathBuf;

use crate::auth::{KeyringStore, TokenAcquirer};
use crate::client::GitHubClient;
use crate::config::{load_config, token_override};
use crate::error::Result;
use crate::fetch::fetch_file;

/// Handle `hubfetch file <org> <repo> <path>`.
pub async fn handle_file(
    org: &str,
    repo: &str,
    path: &str,
    output: Option<PathBuf>,
    branch: &str,
    no_browser: bool,
) -> Result<()> {
    let config = load_config()?;
    let client = GitHubClient::new(&config.api)?;

    let acquirer = TokenAcquirer::new(
        super::acquirer_config(&config, repo, token_override(), no_browser),
        Box::new(KeyringStore::new()),
    );
    let token = acquirer.acquire(&client).await?;
    acquirer.cache_if_fresh(&token);

    let target = fetch_file(&client, &token, org, repo, path, branch, output).await?;

    println!("Saved {org}/{repo}/{path} to {}", target.display());
    Ok(())
}
