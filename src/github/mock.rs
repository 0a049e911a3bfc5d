//! Mock client for testing the gallery without a network.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::client::GitHubClient;
use super::error::{FetchError, Result};
use super::models::{Repository, UserProfile};

/// Mock implementation for testing.
///
/// `None` fixtures make the corresponding fetch fail with an HTTP 404,
/// mirroring the single failure category the real client produces.
/// Fetched usernames are recorded for assertions.
#[derive(Clone)]
pub struct MockGitHubClient {
    /// Profile returned by `fetch_profile` (None = fail).
    pub profile: Option<UserProfile>,
    /// Collection returned by `fetch_repositories` (None = fail).
    pub repositories: Option<Vec<Repository>>,
    /// Usernames passed to `fetch_profile`.
    pub profile_fetches: Arc<Mutex<Vec<String>>>,
    /// Usernames passed to `fetch_repositories`.
    pub repository_fetches: Arc<Mutex<Vec<String>>>,
}

impl MockGitHubClient {
    pub fn new() -> Self {
        Self {
            profile: Some(UserProfile {
                public_repos: 0,
                followers: 0,
            }),
            repositories: Some(Vec::new()),
            profile_fetches: Arc::new(Mutex::new(Vec::new())),
            repository_fetches: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_repositories(mut self, repositories: Vec<Repository>) -> Self {
        self.repositories = Some(repositories);
        self
    }

    pub fn failing_profile(mut self) -> Self {
        self.profile = None;
        self
    }

    pub fn failing_repositories(mut self) -> Self {
        self.repositories = None;
        self
    }

    fn not_found(username: &str, endpoint: &str) -> FetchError {
        FetchError::Status {
            status: 404,
            url: format!("https://api.github.com/users/{username}{endpoint}"),
        }
    }
}

#[async_trait]
impl GitHubClient for MockGitHubClient {
    async fn fetch_profile(&self, username: &str) -> Result<UserProfile> {
        self.profile_fetches
            .lock()
            .unwrap()
            .push(username.to_string());
        self.profile
            .ok_or_else(|| Self::not_found(username, ""))
    }

    async fn fetch_repositories(&self, username: &str) -> Result<Vec<Repository>> {
        self.repository_fetches
            .lock()
            .unwrap()
            .push(username.to_string());
        self.repositories
            .clone()
            .ok_or_else(|| Self::not_found(username, "/repos"))
    }
}
