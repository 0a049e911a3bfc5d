//! Summary counters derived from the fetched profile.

use crate::github::{Repository, UserProfile};

/// Counters shown in the stats strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub projects: u32,
    pub followers: u32,
}

/// Derive the stat-strip counters from a fetched profile.
/// Trusts its input; the client has already validated the response.
pub fn summarize(profile: &UserProfile) -> Stats {
    Stats {
        projects: profile.public_repos,
        followers: profile.followers,
    }
}

/// Total stars across the fetched repositories.
/// Only surfaced in the diagnostic log, never in the gallery itself.
pub fn total_stars(repos: &[Repository]) -> u64 {
    repos.iter().map(|r| u64::from(r.stargazers_count)).sum()
}
