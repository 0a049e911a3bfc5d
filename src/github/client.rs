//! GitHub API client for the public, unauthenticated REST endpoints.

use async_trait::async_trait;
use tracing::debug;

use super::error::{FetchError, Result};
use super::models::{Repository, UserProfile};

/// Repositories fetched per profile.
///
/// A single page of 100 is the practical ceiling for a personal profile;
/// the client does not paginate further, so repositories beyond the first
/// page are not fetched.
pub const REPO_FETCH_LIMIT: u32 = 100;

/// Sent with every request; GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Read-only client surface the gallery depends on.
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch the public profile for `username`.
    async fn fetch_profile(&self, username: &str) -> Result<UserProfile>;

    /// Fetch up to [`REPO_FETCH_LIMIT`] repositories for `username`,
    /// most recently updated first.
    async fn fetch_repositories(&self, username: &str) -> Result<Vec<Repository>>;
}

/// Production implementation backed by reqwest.
///
/// Requests carry no authentication, so they are subject to the
/// unauthenticated rate limit; a rate-limited response surfaces as an
/// ordinary [`FetchError::Status`].
pub struct HttpGitHubClient {
    client: reqwest::Client,
    api_base: String,
}

impl HttpGitHubClient {
    /// Create a client against the given API base URL
    /// (`https://api.github.com` in production, a local server in tests).
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: String) -> Result<T> {
        debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl GitHubClient for HttpGitHubClient {
    async fn fetch_profile(&self, username: &str) -> Result<UserProfile> {
        let url = format!("{}/users/{username}", self.api_base);
        self.get_json(url).await
    }

    async fn fetch_repositories(&self, username: &str) -> Result<Vec<Repository>> {
        let url = format!(
            "{}/users/{username}/repos?sort=updated&per_page={REPO_FETCH_LIMIT}",
            self.api_base
        );
        self.get_json(url).await
    }
}
