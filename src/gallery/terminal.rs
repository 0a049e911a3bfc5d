//! Terminal rendering of the gallery.

use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

use super::card::Card;
use super::controller::GallerySurface;
use super::stats::Stats;
use crate::shared::text::{clip_to_width, wrap_to_width};
use crate::theme::Theme;

/// Card body width in display columns.
const CARD_WIDTH: usize = 72;

const RESET: &str = "\x1b[0m";

/// ANSI palette derived from the persisted theme.
#[derive(Clone, Copy)]
struct Palette {
    accent: &'static str,
    dim: &'static str,
    error: &'static str,
    reset: &'static str,
}

impl Palette {
    fn for_theme(theme: Theme, colored: bool) -> Self {
        if !colored {
            return Self {
                accent: "",
                dim: "",
                error: "",
                reset: "",
            };
        }
        match theme {
            // Regular colors read better on light backgrounds.
            Theme::Light => Self {
                accent: "\x1b[34m",
                dim: "\x1b[90m",
                error: "\x1b[31m",
                reset: RESET,
            },
            // Bright variants for dark backgrounds.
            Theme::Dark => Self {
                accent: "\x1b[96m",
                dim: "\x1b[37m",
                error: "\x1b[91m",
                reset: RESET,
            },
        }
    }
}

/// Spinner shown while a fetch is in flight; hidden when stderr is not a
/// terminal so piped output stays clean.
pub fn loading_spinner(message: &'static str) -> ProgressBar {
    if std::io::stderr().is_terminal() {
        let s = ProgressBar::new_spinner();
        #[allow(clippy::expect_used)] // static template string
        s.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
                .template("{spinner} {msg}")
                .expect("valid template"),
        );
        s.set_message(message);
        s.enable_steady_tick(std::time::Duration::from_millis(80));
        s
    } else {
        ProgressBar::hidden()
    }
}

/// Writes the gallery to stdout, colored per the persisted theme.
pub struct TerminalSurface {
    palette: Palette,
    spinner: Option<ProgressBar>,
    load_more_visible: bool,
}

impl TerminalSurface {
    pub fn new(theme: Theme) -> Self {
        let colored = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self {
            palette: Palette::for_theme(theme, colored),
            spinner: None,
            load_more_visible: false,
        }
    }

    /// Whether the controller last left the "load more" affordance shown.
    pub fn load_more_visible(&self) -> bool {
        self.load_more_visible
    }
}

impl GallerySurface for TerminalSurface {
    fn set_stats_loading(&mut self, loading: bool) {
        if loading {
            self.spinner = Some(loading_spinner("Fetching GitHub data..."));
        } else if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn show_stats(&mut self, stats: Stats) {
        let Palette { accent, reset, .. } = self.palette;
        println!(
            "{accent}{}{reset} projects · {accent}{}{reset} followers",
            stats.projects, stats.followers
        );
    }

    fn append_card(&mut self, card: &Card) {
        let Palette {
            accent, dim, reset, ..
        } = self.palette;

        println!();
        println!("{accent}{}{reset}", clip_to_width(&card.title, CARD_WIDTH));
        for line in wrap_to_width(&card.description, CARD_WIDTH - 2) {
            println!("  {line}");
        }
        println!("  {dim}view{reset}  {}", card.primary_link);
        println!("  {dim}code{reset}  {}", card.code_link);
        println!("  {dim}img{reset}   {}", card.image_url);
        println!("  {dim}alt{reset}   {}", card.fallback_image_url);
        if !card.tags.is_empty() {
            let chips: Vec<String> = card.tags.iter().map(|t| format!("[{t}]")).collect();
            println!("  {dim}{}{reset}", chips.join(" "));
        }
    }

    fn show_failure(&mut self, message: &str) {
        let Palette { error, reset, .. } = self.palette;
        println!("{error}{message}{reset}");
    }

    fn set_load_more_visible(&mut self, visible: bool) {
        self.load_more_visible = visible;
    }
}
