//! Light/dark theme preference, persisted across sessions.
//!
//! The terminal analog of the page's theme toggle: a single small file
//! under the data directory holding `light` or `dark`, read at session
//! start and rewritten on every toggle.

use std::path::PathBuf;

use clap::Subcommand;

/// Environment variable to override the theme location (primarily for testing).
const DATA_DIR_ENV: &str = "FOLIO_DATA_DIR";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Read the persisted preference; light when absent or unreadable.
pub fn load() -> Theme {
    theme_file()
        .and_then(|path| std::fs::read_to_string(path).ok())
        .and_then(|content| Theme::parse(content.trim()))
        .unwrap_or_default()
}

/// Persist the preference, creating the data directory if needed.
pub fn save(theme: Theme) -> anyhow::Result<()> {
    let Some(path) = theme_file() else {
        anyhow::bail!("Could not determine the data directory");
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, theme.as_str())?;
    Ok(())
}

/// Theme file under the folio data directory.
/// Returns ~/.local/share/folio/theme unless overridden.
fn theme_file() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return Some(PathBuf::from(dir).join("theme"));
    }
    crate::shared::dirs::data_dir().map(|d| d.join("folio").join("theme"))
}

/// Theme preference commands.
#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum ThemeCommands {
    /// Print the current theme
    Show,
    /// Switch between light and dark
    Toggle,
}

impl ThemeCommands {
    pub fn run(&self) -> anyhow::Result<()> {
        match self {
            Self::Show => {
                println!("{}", load().as_str());
                Ok(())
            }
            Self::Toggle => {
                let next = load().toggle();
                save(next)?;
                println!("{}", next.as_str());
                Ok(())
            }
        }
    }
}
