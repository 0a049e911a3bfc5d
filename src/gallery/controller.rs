//! Gallery session orchestration.
//!
//! One controller per session drives fetch → aggregate → paginate →
//! render, with a single error boundary at the fetch step. The rendering
//! surface is injected so the whole flow runs headless in tests.

use tracing::{debug, error};

use super::card::Card;
use super::pager::{PAGE_SIZE, Pager};
use super::stats::{self, Stats};
use crate::github::{FetchError, GitHubClient, Repository, UserProfile};

/// Session lifecycle. Strictly forward: there is no way back out of
/// `Failed`, and `Ready` never re-enters `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryState {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Shown in place of the gallery when a fetch fails. Error detail goes to
/// the diagnostic log only.
pub const FAILURE_MESSAGE: &str = "Failed to load projects. Please try again later.";

/// Rendering surface the controller drives.
///
/// The terminal implementation lives in [`super::terminal`]; tests inject
/// a recording surface.
pub trait GallerySurface {
    /// Toggle the "loading" marker on the stats display.
    fn set_stats_loading(&mut self, loading: bool);

    /// Publish the summary counters.
    fn show_stats(&mut self, stats: Stats);

    /// Append one card to the gallery, in the order received.
    fn append_card(&mut self, card: &Card);

    /// Replace the gallery contents with a static failure message.
    fn show_failure(&mut self, message: &str);

    /// Show or hide the "load more" affordance.
    fn set_load_more_visible(&mut self, visible: bool);
}

pub struct GalleryController<C, S> {
    client: C,
    surface: S,
    state: GalleryState,
    pager: Option<Pager>,
    render_in_flight: bool,
}

impl<C: GitHubClient, S: GallerySurface> GalleryController<C, S> {
    pub fn new(client: C, surface: S) -> Self {
        Self {
            client,
            surface,
            state: GalleryState::Idle,
            pager: None,
            render_in_flight: false,
        }
    }

    pub fn state(&self) -> GalleryState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// True while unrevealed repositories remain.
    pub fn has_more(&self) -> bool {
        self.pager.as_ref().is_some_and(Pager::has_more)
    }

    /// Run the one-shot load: `Idle → Loading → Ready | Failed`.
    ///
    /// Calling this again after the first run is a no-op; the only restart
    /// path is a new session.
    pub async fn start(&mut self, username: &str) {
        if self.state != GalleryState::Idle {
            return;
        }
        self.state = GalleryState::Loading;
        self.surface.set_stats_loading(true);

        match self.fetch(username).await {
            Ok((profile, repos)) => {
                let stats = stats::summarize(&profile);
                debug!(
                    projects = stats.projects,
                    followers = stats.followers,
                    stars = stats::total_stars(&repos),
                    "GitHub data fetched"
                );
                self.surface.show_stats(stats);
                self.surface.set_stats_loading(false);
                self.pager = Some(Pager::new(repos));
                self.state = GalleryState::Ready;
                self.render_next_page();
            }
            Err(err) => {
                error!("Error fetching GitHub data: {err}");
                self.surface.set_stats_loading(false);
                self.state = GalleryState::Failed;
                self.surface.show_failure(FAILURE_MESSAGE);
                self.surface.set_load_more_visible(false);
            }
        }
    }

    /// The profile fetch is awaited before the repository fetch. Both must
    /// succeed; either failure becomes the single session failure.
    async fn fetch(&self, username: &str) -> Result<(UserProfile, Vec<Repository>), FetchError> {
        let profile = self.client.fetch_profile(username).await?;
        let repos = self.client.fetch_repositories(username).await?;
        Ok((profile, repos))
    }

    /// One "load more" activation.
    ///
    /// No-op unless `Ready`. Activations can queue up faster than a page
    /// renders; those arriving mid-render are dropped rather than
    /// rendering duplicate cards.
    pub fn load_more(&mut self) {
        if self.state != GalleryState::Ready || self.render_in_flight {
            return;
        }
        self.render_next_page();
    }

    fn render_next_page(&mut self) {
        let Some(pager) = self.pager.as_mut() else {
            return;
        };
        self.render_in_flight = true;
        for repo in pager.next_page(PAGE_SIZE) {
            self.surface.append_card(&Card::render(repo));
        }
        self.surface.set_load_more_visible(pager.has_more());
        self.render_in_flight = false;
    }
}
