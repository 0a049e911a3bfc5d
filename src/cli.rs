use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::browse::OpenArgs;
use crate::config::ConfigCommands;
use crate::gallery::ShowArgs;
use crate::theme::ThemeCommands;

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the project gallery
    Show(ShowArgs),

    /// Show the profile statistics
    Stats,

    /// Open a project's page in the browser
    Open(OpenArgs),

    /// Manage the color theme
    #[command(subcommand)]
    Theme(ThemeCommands),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
