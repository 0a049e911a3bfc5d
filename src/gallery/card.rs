//! Pure mapping from a repository record to a displayable project card.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::github::Repository;

/// Language → glyph lookup for card titles. Kept as data so adding a
/// language is a one-line change.
const LANGUAGE_GLYPHS: &[(&str, &str)] = &[
    ("TypeScript", "💢"),
    ("JavaScript", "📜"),
    ("C++", "🖥️"),
    ("C", "🧨"),
    ("Python", "🐍"),
    ("HTML", "📇"),
    ("CSS", "🎨"),
    ("TSQL", "✈️"),
    ("Java", "☕"),
    ("Rust", "🦀"),
    ("Go", "🐹"),
    ("Ruby", "💎"),
    ("PHP", "🐘"),
    ("Swift", "🍎"),
    ("Kotlin", "🎯"),
];

/// Glyph for unmapped or absent languages.
const DEFAULT_GLYPH: &str = "💻";

/// Shown when a repository has no description.
const FALLBACK_DESCRIPTION: &str = "A cool project";

/// Topic chips shown per card, in source order.
const MAX_TOPIC_TAGS: usize = 4;

/// Characters escaped the way `encodeURIComponent` escapes them:
/// everything except alphanumerics and `- _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A fully resolved project card. Every field has a fallback, so the
/// mapping never fails and never mutates the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub description: String,
    /// Homepage when the repository has one, else the code URL.
    pub primary_link: String,
    /// Always the code URL.
    pub code_link: String,
    /// Social-preview image for the repository.
    pub image_url: String,
    /// Substitute for consumers whose image load fails.
    pub fallback_image_url: String,
    pub tags: Vec<String>,
}

impl Card {
    pub fn render(repo: &Repository) -> Self {
        let glyph = language_glyph(repo.language.as_deref());
        let title = format!("{glyph} {}", repo.name.replace('-', " "));

        let description = repo
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(FALLBACK_DESCRIPTION)
            .to_string();

        let primary_link = repo
            .homepage
            .as_deref()
            .filter(|h| !h.is_empty())
            .unwrap_or(&repo.html_url)
            .to_string();

        let image_url = format!("https://opengraph.githubassets.com/1/{}", repo.full_name);
        let fallback_image_url = format!(
            "https://via.placeholder.com/400x250?text={}",
            utf8_percent_encode(&repo.name, URI_COMPONENT)
        );

        let mut tags = Vec::new();
        if let Some(language) = repo.language.as_deref().filter(|l| !l.is_empty()) {
            tags.push(language.to_string());
        }
        tags.extend(repo.topics.iter().take(MAX_TOPIC_TAGS).cloned());
        tags.push(format!("⭐ {}", repo.stargazers_count));
        if repo.forks_count > 0 {
            tags.push(format!("🍴 {}", repo.forks_count));
        }

        Self {
            title,
            description,
            primary_link,
            code_link: repo.html_url.clone(),
            image_url,
            fallback_image_url,
            tags,
        }
    }
}

fn language_glyph(language: Option<&str>) -> &'static str {
    language
        .and_then(|lang| LANGUAGE_GLYPHS.iter().find(|(name, _)| *name == lang))
        .map_or(DEFAULT_GLYPH, |(_, glyph)| glyph)
}
