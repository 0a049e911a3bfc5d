//! Data models for the GitHub REST responses the portfolio consumes.
//!
//! Field names mirror the API payloads exactly, so the default serde
//! mapping deserializes them with no renames.

use serde::Deserialize;

/// A public user profile (`GET /users/{username}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    /// Number of public repositories.
    pub public_repos: u32,
    /// Number of followers.
    pub followers: u32,
}

/// A single repository (`GET /users/{username}/repos`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    /// `owner/name` slug.
    pub full_name: String,
    /// Repository name.
    pub name: String,
    /// Short description, if any.
    pub description: Option<String>,
    /// Project homepage, if any.
    pub homepage: Option<String>,
    /// Canonical web URL for the repository.
    pub html_url: String,
    /// Primary language, if detected.
    pub language: Option<String>,
    /// Repository topics; absent in the payload means empty.
    #[serde(default)]
    pub topics: Vec<String>,
    /// Star count.
    pub stargazers_count: u32,
    /// Fork count.
    pub forks_count: u32,
}
