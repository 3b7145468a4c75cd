//! Fetch-specific error types.

use thiserror::Error;

/// Errors specific to file and release-asset fetching.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The requested file, repository, or release does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The path resolves to a directory or other non-file entry.
    #[error("Path is not a file (type '{kind}'). Point hubfetch at a single file.")]
    NotAFile {
        /// The entry type reported by the contents API.
        kind: String,
    },

    /// The latest release carries no assets at all.
    #[error("The latest release has no assets to download.")]
    NoAssets,

    /// No asset name matched the suffix predicate.
    #[error("No release asset matches suffix '{suffix}'.")]
    NoMatchingAsset {
        /// The suffix that was searched for.
        suffix: String,
    },

    /// The contents API returned a missing or undecodable content field.
    #[error("Unusable file content: {0}")]
    BadContent(String),
}

impl FetchError {
    /// Checks if this is a "not found" error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
