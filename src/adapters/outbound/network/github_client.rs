use crate::ports::outbound::DependencyGraphClient;
use crate::sbom_generation::domain::{RepositoryReference, SbomDocument};
use crate::shared::error::SbomError;
use crate::shared::Result;
use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::Deserialize;
use std::time::Duration;

/// Error body returned by the GitHub REST API
#[derive(Debug, Deserialize)]
struct GitHubErrorBody {
    message: String,
}

/// GitHub dependency graph client
///
/// Implements the DependencyGraphClient port against
/// `GET /repos/{owner}/{repo}/dependency-graph/sbom`.
///
/// - One request per repository, no retries
/// - Fixed 30 second timeout
/// - Response body is passed through untouched
pub struct GitHubDependencyGraphClient {
    client: Client,
    api_url: String,
    token: String,
}

impl GitHubDependencyGraphClient {
    pub const DEFAULT_API_URL: &'static str = "https://api.github.com";
    const API_VERSION: &'static str = "2022-11-28";
    const TIMEOUT_SECONDS: u64 = 30;
    const MAX_ERROR_DETAILS_LENGTH: usize = 500;

    /// Creates a client for `api_url` authenticating with `token`
    pub fn new(api_url: &str, token: String) -> Result<Self> {
        Self::with_builder(Client::builder(), api_url, token)
    }

    /// Creates a client from a preconfigured builder (proxy or TLS settings)
    pub fn with_builder(builder: ClientBuilder, api_url: &str, token: String) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("sbomgen/{}", version);

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(Self::API_VERSION),
        );

        let client = builder
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Builds the SBOM endpoint URL for a repository
    pub fn endpoint(&self, repository: &RepositoryReference) -> String {
        format!(
            "{}/repos/{}/{}/dependency-graph/sbom",
            self.api_url,
            urlencoding::encode(repository.owner()),
            urlencoding::encode(repository.name())
        )
    }

    /// Turns an error response body into a one-line detail string
    ///
    /// Prefers the `message` field of a GitHub error body and falls back to
    /// the raw text.
    fn error_details(body: &str) -> String {
        if let Ok(parsed) = serde_json::from_str::<GitHubErrorBody>(body) {
            return parsed.message;
        }

        let trimmed = body.trim();
        if trimmed.len() > Self::MAX_ERROR_DETAILS_LENGTH {
            let cut = (0..=Self::MAX_ERROR_DETAILS_LENGTH)
                .rev()
                .find(|&i| trimmed.is_char_boundary(i))
                .unwrap_or(0);
            format!("{}...", &trimmed[..cut])
        } else {
            trimmed.to_string()
        }
    }
}

impl DependencyGraphClient for GitHubDependencyGraphClient {
    fn fetch_sbom(&self, repository: &RepositoryReference) -> Result<SbomDocument> {
        let url = self.endpoint(repository);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .map_err(|e| SbomError::RemoteApi {
                repository: repository.to_string(),
                status: None,
                details: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| SbomError::RemoteApi {
            repository: repository.to_string(),
            status: Some(status.as_u16()),
            details: format!("Failed to read response body: {}", e),
        })?;

        if !status.is_success() {
            return Err(SbomError::RemoteApi {
                repository: repository.to_string(),
                status: Some(status.as_u16()),
                details: Self::error_details(&body),
            }
            .into());
        }

        Ok(SbomDocument::new(body))
    }
}
