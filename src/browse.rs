//! Open a project's page in the browser.

use clap::Args;

use crate::gallery::Card;
use crate::github::{GitHubClient, HttpGitHubClient, Repository};
use crate::shared::config;

#[derive(Args, Clone, PartialEq, Eq)]
pub struct OpenArgs {
    /// Repository name (as shown in the gallery)
    pub name: String,

    /// Open the code page even when the project has a homepage
    #[arg(long)]
    pub code: bool,
}

pub async fn run(args: &OpenArgs) -> anyhow::Result<()> {
    let config = config::load_config()?;
    let client = HttpGitHubClient::new(config.github.api_base.as_str());
    let repos = client.fetch_repositories(&config.github.username).await?;

    let url = resolve_link(&repos, &args.name, args.code).ok_or_else(|| {
        anyhow::anyhow!(
            "No repository named '{}' in {}'s profile",
            args.name,
            config.github.username
        )
    })?;

    open::that(&url)?;
    println!("Opened {url}");
    Ok(())
}

/// Link for the named repository: the project homepage unless `code`
/// forces the code URL, with the card's usual fallback rules.
fn resolve_link(repos: &[Repository], name: &str, code: bool) -> Option<String> {
    let repo = repos.iter().find(|r| r.name == name)?;
    let card = Card::render(repo);
    Some(if code {
        card.code_link
    } else {
        card.primary_link
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::factories::{repository, repository_with};

    #[test]
    fn resolve_link_prefers_the_homepage() {
        let repos = vec![
            repository("other"),
            repository_with("site", |r| {
                r.homepage = Some("https://example.com".to_string());
            }),
        ];

        assert_eq!(
            resolve_link(&repos, "site", false),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn resolve_link_forces_code_url_when_requested() {
        let repos = vec![repository_with("site", |r| {
            r.homepage = Some("https://example.com".to_string());
        })];

        assert_eq!(
            resolve_link(&repos, "site", true),
            Some("https://github.com/octocat/site".to_string())
        );
    }

    #[test]
    fn resolve_link_falls_back_to_code_url_without_homepage() {
        let repos = vec![repository("bare")];

        assert_eq!(
            resolve_link(&repos, "bare", false),
            Some("https://github.com/octocat/bare".to_string())
        );
    }

    #[test]
    fn resolve_link_returns_none_for_unknown_names() {
        let repos = vec![repository("known")];

        assert_eq!(resolve_link(&repos, "unknown", false), None);
    }
}
