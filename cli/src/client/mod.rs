//! HTTP client for the GitHub REST and OAuth endpoints.

pub mod github;

pub use github::{
    ContentsResponse, DeviceCodeResponse, GitHubClient, Release, ReleaseAsset, DEFAULT_BRANCH,
};
