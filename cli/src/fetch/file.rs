//! Single-file download via the repository contents API.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::auth::Token;
use crate::client::GitHubClient;
use crate::error::Result;
use crate::fetch::FetchError;

/// Fetch one repository file and write it to disk.
///
/// The output path is the explicit `output` when given, otherwise the last
/// segment of `file_path` joined to the current working directory. Parent
/// directories are created on demand. The file is written only after the
/// full payload has been fetched and decoded, so a failed fetch leaves no
/// partial output.
///
/// # Errors
///
/// Returns [`FetchError::NotFound`] on 404, [`FetchError::NotAFile`] when the
/// path resolves to anything other than a file, [`FetchError::BadContent`]
/// when the content field is missing or not valid base64, or a transport
/// error on other request failures.
pub async fn fetch_file(
    client: &GitHubClient,
    token: &Token,
    org: &str,
    repo: &str,
    file_path: &str,
    branch: &str,
    output: Option<PathBuf>,
) -> Result<PathBuf> {
    let contents = client
        .file_contents(token.value(), org, repo, file_path, branch)
        .await?;

    if contents.kind != "file" {
        return Err(FetchError::NotAFile {
            kind: contents.kind,
        }
        .into());
    }

    let encoded = contents
        .content
        .ok_or_else(|| FetchError::BadContent("response has no content field".to_string()))?;

    // GitHub wraps base64 payloads with newlines; strip whitespace first.
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = BASE64
        .decode(compact.as_bytes())
        .map_err(|e| FetchError::BadContent(format!("invalid base64 content: {e}")))?;

    let target = resolve_target(file_path, output, &std::env::current_dir()?)?;
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&target, &bytes)?;

    tracing::info!(path = %target.display(), size = bytes.len(), "wrote file");
    Ok(target)
}

/// Resolve the download target: explicit output wins, otherwise the source
/// file's base name joined to `cwd`.
fn resolve_target(file_path: &str, output: Option<PathBuf>, cwd: &Path) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path);
    }

    let name = Path::new(file_path)
        .file_name()
        .ok_or_else(|| FetchError::BadContent(format!("path '{file_path}' has no file name")))?;

    Ok(cwd.join(name))
}
