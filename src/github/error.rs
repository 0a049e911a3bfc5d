//! GitHub API error types.

use thiserror::Error;

/// Single failure category for both portfolio fetches.
///
/// Transport failures and non-success statuses (including not-found and
/// rate-limited) all land here; the gallery treats them identically and
/// never retries.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, TLS, interrupted body).
    #[error("GitHub request failed: {0}")]
    Network(String),

    /// Non-success HTTP status.
    #[error("GitHub responded with HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// Response body did not match the expected shape.
    #[error("Failed to decode GitHub response: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;
