//! The `hubfetch asset` command.

use std::path::Path;

use crate::auth::{KeyringStore, TokenAcquirer};
use crate::client::GitHubClient;
use crate::config::{load_config, token_override};
use crate::error::{HubfetchError, Result};
use crate::fetch::fetch_latest_asset;

/// Handle `hubfetch asset <org> <repo>`.
///
/// Downloads the selected asset to the system temp directory. With an install
/// command, runs it on the downloaded file and removes the file afterward
/// (removal failure is a non-fatal warning). Without one, the file is kept
/// and its path printed.
pub async fn handle_asset(
    org: &str,
    repo: &str,
    suffix: &str,
    install_with: Option<&str>,
    keep: bool,
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

    let target = fetch_latest_asset(&client, &token, org, repo, suffix).await?;
    println!("Downloaded {}", target.display());

    let Some(command) = install_with else {
        return Ok(());
    };

    run_install(command, &target)?;
    println!("Install complete.");

    if keep {
        println!("Keeping {}", target.display());
    } else if let Err(e) = std::fs::remove_file(&target) {
        tracing::warn!(path = %target.display(), "failed to remove downloaded asset: {e}");
    }

    Ok(())
}

/// Run the install command with the downloaded path appended.
fn run_install(command: &str, target: &Path) -> Result<()> {
    let mut parts = command.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| HubfetchError::InstallFailed("empty install command".to_string()))?;

    let status = std::process::Command::new(program)
        .args(parts)
        .arg(target)
        .status()
        .map_err(|e| HubfetchError::InstallFailed(format!("could not run '{command}': {e}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(HubfetchError::InstallFailed(format!(
            "'{command}' exited with {status}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn install_succeeds_when_the_command_does() {
        assert!(run_install("true", Path::new("/tmp/x.whl")).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn install_failure_is_surfaced() {
        let err = run_install("false", Path::new("/tmp/x.whl")).unwrap_err();
        assert!(matches!(err, HubfetchError::InstallFailed(_)));
    }

    #[test]
    fn empty_install_command_is_rejected() {
        let err = run_install("   ", Path::new("/tmp/x.whl")).unwrap_err();
        assert!(matches!(err, HubfetchError::InstallFailed(_)));
    }
}
