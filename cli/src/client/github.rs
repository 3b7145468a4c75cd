//! GitHub API client implementation.
//!
//! A thin wrapper over [`reqwest::Client`] covering the four endpoints hubfetch
//! needs: the device-code and token-exchange OAuth endpoints, the repository
//! contents API, and the latest-release lookup plus asset download. Base URLs
//! are taken from configuration so tests can point the client at a mock server.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::config::ApiConfig;
use crate::error::{HubfetchError, Result};
use crate::fetch::FetchError;

/// The platform default branch; a `ref` query parameter is only sent for others.
pub const DEFAULT_BRANCH: &str = "main";

/// Response from the device-code endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceCodeResponse {
    /// Opaque code used server-side during polling. Never displayed.
    pub device_code: String,
    /// Short code the user enters in their browser.
    pub user_code: String,
    /// URL the user visits to authorize the device.
    pub verification_uri: String,
    /// Server-suggested polling interval in seconds.
    pub interval: Option<u64>,
    /// Lifetime of the device code in seconds.
    pub expires_in: Option<u64>,
}

/// Response from the repository contents API.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentsResponse {
    /// Entry type: `"file"`, `"dir"`, `"symlink"`, or `"submodule"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Content encoding, `"base64"` for files.
    pub encoding: Option<String>,
    /// Base64-encoded file content (GitHub inserts newlines).
    pub content: Option<String>,
    /// File size in bytes.
    #[serde(default)]
    pub size: u64,
}

/// A release as returned by the latest-release endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Release tag, e.g. `v1.2.3`.
    pub tag_name: String,
    /// Assets attached to the release, in API order.
    pub assets: Vec<ReleaseAsset>,
}

/// A binary artifact attached to a release.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    /// Asset file name.
    pub name: String,
    /// API download URL; fetched with `Accept: application/octet-stream`.
    pub url: String,
    /// Asset size in bytes.
    #[serde(default)]
    pub size: u64,
}

/// Client for the GitHub REST API and OAuth device-flow endpoints.
pub struct GitHubClient {
    client: Client,
    base_url: Url,
    oauth_url: Url,
}

impl GitHubClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(format!("hubfetch/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            oauth_url: config.oauth_url.clone(),
        })
    }

    /// Request a device code to begin the device authorization flow.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success response.
    pub async fn request_device_code(
        &self,
        client_id: &str,
        scope: &str,
    ) -> Result<DeviceCodeResponse> {
        let url = self.oauth_url.join("/login/device/code")?;

        let response = self
            .client
            .post(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&[("client_id", client_id), ("scope", scope)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        Ok(response.json().await?)
    }

    /// Attempt one token exchange for an in-progress device authorization.
    ///
    /// Returns the raw JSON body. GitHub reports pending/denied/expired states
    /// in the body (sometimes with a 4xx status), so the caller classifies the
    /// outcome rather than this method.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unparseable body.
    pub async fn exchange_device_code(
        &self,
        client_id: &str,
        device_code: &str,
    ) -> Result<serde_json::Value> {
        let url = self.oauth_url.join("/login/oauth/access_token")?;

        let response = self
            .client
            .post(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&[
                ("client_id", client_id),
                ("device_code", device_code),
                ("grant_type", "urn:ietf:params:oauth:grant-type:device_code"),
            ])
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        match serde_json::from_slice(&bytes) {
            Ok(body) => Ok(body),
            Err(_) if !status.is_success() => Err(HubfetchError::ApiError {
                status: status.as_u16(),
                message: String::from_utf8_lossy(&bytes).into_owned(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Fetch file metadata and base64 content via the contents API.
    ///
    /// The `ref` query parameter is appended only when `branch` differs from
    /// the platform default.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NotFound`] on 404, or a transport/API error otherwise.
    pub async fn file_contents(
        &self,
        token: &str,
        org: &str,
        repo: &str,
        path: &str,
        branch: &str,
    ) -> Result<ContentsResponse> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| HubfetchError::Config("API base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(["repos", org, repo, "contents"])
            .extend(path.split('/').filter(|s| !s.is_empty()));
        if branch != DEFAULT_BRANCH {
            url.query_pairs_mut().append_pair("ref", branch);
        }

        let response = self
            .client
            .get(url)
            .header(reqwest::header::AUTHORIZATION, format!("token {token}"))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(format!("{org}/{repo}/{path}")).into());
        }
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        Ok(response.json().await?)
    }

    /// Fetch the latest release for a repository.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NotFound`] on 404, or a transport/API error otherwise.
    pub async fn latest_release(&self, token: &str, org: &str, repo: &str) -> Result<Release> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| HubfetchError::Config("API base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(["repos", org, repo, "releases", "latest"]);

        let response = self
            .client
            .get(url)
            .header(reqwest::header::AUTHORIZATION, format!("token {token}"))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(format!("{org}/{repo} latest release")).into());
        }
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        Ok(response.json().await?)
    }

    /// Download raw bytes from an asset URL.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success response.
    pub async fn download(&self, token: &str, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::AUTHORIZATION, format!("token {token}"))
            .header(reqwest::header::ACCEPT, "application/octet-stream")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Convert a non-success response into an [`HubfetchError::ApiError`].
async fn api_error(response: reqwest::Response) -> HubfetchError {
    let status = response.status().as_u16();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    HubfetchError::ApiError { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> GitHubClient {
        let config = ApiConfig {
            base_url: Url::parse(&server.uri()).unwrap(),
            oauth_url: Url::parse(&server.uri()).unwrap(),
            timeout_secs: 5,
        };
        GitHubClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn contents_request_omits_ref_for_default_branch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/acme/widget/contents/src/lib.rs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "type": "file",
                "encoding": "base64",
                "content": "aGVsbG8=",
                "size": 5
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let contents = client
            .file_contents("tok", "acme", "widget", "src/lib.rs", DEFAULT_BRANCH)
            .await
            .unwrap();

        assert_eq!(contents.kind, "file");
        assert_eq!(contents.content.as_deref(), Some("aGVsbG8="));

        // The mock has no query matcher; a `ref` parameter would still match,
        // so check the recorded request explicitly.
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].url.query().is_none());
    }

    #[tokio::test]
    async fn contents_request_includes_ref_for_other_branches() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/acme/widget/contents/README.md"))
            .and(query_param("ref", "develop"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "type": "file",
                "encoding": "base64",
                "content": "aGk=",
                "size": 2
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let contents = client
            .file_contents("tok", "acme", "widget", "README.md", "develop")
            .await
            .unwrap();

        assert_eq!(contents.kind, "file");
    }

    #[tokio::test]
    async fn contents_sends_token_auth_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/acme/widget/contents/f"))
            .and(header("Authorization", "token sekrit"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "type": "file",
                "content": "",
                "size": 0
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        assert!(client
            .file_contents("sekrit", "acme", "widget", "f", DEFAULT_BRANCH)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn contents_404_maps_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .file_contents("tok", "acme", "widget", "missing.txt", DEFAULT_BRANCH)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            HubfetchError::Fetch(FetchError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn latest_release_parses_assets_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/acme/widget/releases/latest"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "tag_name": "v1.0.0",
                "assets": [
                    {"name": "a.tar", "url": "https://example.com/a", "size": 1},
                    {"name": "b.whl", "url": "https://example.com/b", "size": 2}
                ]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let release = client.latest_release("tok", "acme", "widget").await.unwrap();

        assert_eq!(release.tag_name, "v1.0.0");
        assert_eq!(release.assets.len(), 2);
        assert_eq!(release.assets[0].name, "a.tar");
        assert_eq!(release.assets[1].name, "b.whl");
    }

    #[tokio::test]
    async fn download_requests_octet_stream() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/asset/1"))
            .and(header("Accept", "application/octet-stream"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"binary".to_vec()))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let bytes = client
            .download("tok", &format!("{}/asset/1", server.uri()))
            .await
            .unwrap();

        assert_eq!(bytes, b"binary");
    }

    #[tokio::test]
    async fn exchange_returns_error_body_for_pending() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login/oauth/access_token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "authorization_pending"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let body = client.exchange_device_code("cid", "dc").await.unwrap();

        assert_eq!(body["error"], "authorization_pending");
    }
}
