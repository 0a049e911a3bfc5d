//! The project gallery: fetch, aggregate, paginate, render.
//!
//! Mirrors the portfolio page's data flow. One session per invocation:
//! the controller fetches the profile and repositories, publishes the
//! stat counters, and reveals the project cards six at a time.

mod card;
mod controller;
mod pager;
mod stats;
mod terminal;

pub use card::Card;

use std::io::{BufRead, IsTerminal, Write};

use clap::Args;

use crate::github::{GitHubClient, HttpGitHubClient};
use crate::shared::config;
use crate::theme;
use controller::{GalleryController, GalleryState};
use terminal::TerminalSurface;

#[derive(Args, Clone, PartialEq, Eq)]
pub struct ShowArgs {
    /// Reveal every page without prompting
    #[arg(long)]
    pub all: bool,
}

/// Run a gallery session: fetch, show the stats, page through the cards.
pub async fn run_show(args: &ShowArgs) -> anyhow::Result<()> {
    let config = config::load_config()?;
    let client = HttpGitHubClient::new(config.github.api_base.as_str());
    let surface = TerminalSurface::new(theme::load());
    let mut controller = GalleryController::new(client, surface);

    controller.start(&config.github.username).await;

    if controller.state() == GalleryState::Failed {
        // The failure message is already rendered; detail is in the log.
        return Ok(());
    }

    let prompt = !args.all;
    while controller.surface().load_more_visible() {
        if prompt && (!std::io::stdin().is_terminal() || !confirm_load_more()?) {
            break;
        }
        controller.load_more();
    }

    Ok(())
}

/// Fetch the profile and print the stat-strip counters.
pub async fn run_stats() -> anyhow::Result<()> {
    let config = config::load_config()?;
    let client = HttpGitHubClient::new(config.github.api_base.as_str());

    let spinner = terminal::loading_spinner("Fetching GitHub data...");
    let result = client.fetch_profile(&config.github.username).await;
    spinner.finish_and_clear();

    let counters = stats::summarize(&result?);
    println!("Projects: {}", counters.projects);
    println!("Followers: {}", counters.followers);
    Ok(())
}

/// The terminal "load more" affordance: Enter reveals the next page.
fn confirm_load_more() -> anyhow::Result<bool> {
    let mut out = std::io::stderr();
    write!(out, "Load more? [Y/n] ")?;
    out.flush()?;

    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(false);
    }
    let answer = line.trim();
    Ok(answer.is_empty() || answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}
