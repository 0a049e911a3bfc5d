//! Fixed-size pagination over the fetched repository collection.

use crate::github::Repository;

/// Cards revealed per "load more" activation.
pub const PAGE_SIZE: usize = 6;

/// Owns the full collection for the session and tracks how many entries
/// have been revealed. The cursor only moves forward; starting over means
/// constructing a new pager.
pub struct Pager {
    repos: Vec<Repository>,
    displayed: usize,
}

impl Pager {
    pub fn new(repos: Vec<Repository>) -> Self {
        Self {
            repos,
            displayed: 0,
        }
    }

    /// Next slice of at most `page_size` entries, advancing the cursor by
    /// the number actually returned. Empty once exhausted; exhaustion is
    /// not an error.
    pub fn next_page(&mut self, page_size: usize) -> &[Repository] {
        let start = self.displayed;
        let end = (start + page_size).min(self.repos.len());
        self.displayed = end;
        &self.repos[start..end]
    }

    /// True while entries remain beyond the cursor.
    pub fn has_more(&self) -> bool {
        self.displayed < self.repos.len()
    }
}
