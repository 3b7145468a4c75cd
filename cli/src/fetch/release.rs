//! Latest-release asset selection and download.

use std::path::{Path, PathBuf};

use crate::auth::Token;
use crate::client::{GitHubClient, ReleaseAsset};
use crate::error::Result;
use crate::fetch::FetchError;

/// Select the first asset (in the list's given order) whose name ends with
/// `suffix`.
///
/// # Errors
///
/// Returns [`FetchError::NoAssets`] for an empty list and
/// [`FetchError::NoMatchingAsset`] when nothing matches.
pub fn select_asset<'a>(
    assets: &'a [ReleaseAsset],
    suffix: &str,
) -> std::result::Result<&'a ReleaseAsset, FetchError> {
    if assets.is_empty() {
        return Err(FetchError::NoAssets);
    }

    assets
        .iter()
        .find(|asset| asset.name.ends_with(suffix))
        .ok_or_else(|| FetchError::NoMatchingAsset {
            suffix: suffix.to_string(),
        })
}

/// Locate the latest release, pick an asset by filename suffix, and download
/// it into the system temp directory.
///
/// The caller is responsible for any install step and for deleting the file
/// afterward.
///
/// # Errors
///
/// Returns a fetch error when the release or a matching asset is missing, or
/// a transport error when the download fails.
pub async fn fetch_latest_asset(
    client: &GitHubClient,
    token: &Token,
    org: &str,
    repo: &str,
    suffix: &str,
) -> Result<PathBuf> {
    fetch_latest_asset_to(client, token, org, repo, suffix, &std::env::temp_dir()).await
}

/// [`fetch_latest_asset`] with an explicit destination directory.
pub async fn fetch_latest_asset_to(
    client: &GitHubClient,
    token: &Token,
    org: &str,
    repo: &str,
    suffix: &str,
    dir: &Path,
) -> Result<PathBuf> {
    let release = client.latest_release(token.value(), org, repo).await?;
    let asset = select_asset(&release.assets, suffix)?;

    tracing::info!(
        tag = %release.tag_name,
        asset = %asset.name,
        size = asset.size,
        "downloading release asset"
    );

    let bytes = client.download(token.value(), &asset.url).await?;

    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }
    let target = dir.join(&asset.name);
    std::fs::write(&target, &bytes)?;

    Ok(target)
}
