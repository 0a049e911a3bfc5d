//! GitHub API client module.
//!
//! Read-only, unauthenticated access to the two public REST endpoints the
//! portfolio consumes, behind a trait so the gallery can be tested without
//! a network.

mod client;
mod error;
#[cfg(test)]
pub mod mock;
mod models;

pub use client::{GitHubClient, HttpGitHubClient};
pub use error::FetchError;
pub use models::{Repository, UserProfile};

#[cfg(test)]
pub use mock::MockGitHubClient;
