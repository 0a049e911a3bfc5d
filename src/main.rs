mod browse;
mod cli;
mod config;
mod gallery;
mod github;
mod shared;
#[cfg(test)]
mod testing;
mod theme;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let Cli { command } = Cli::parse();

    match command {
        Commands::Show(args) => gallery::run_show(&args).await,
        Commands::Stats => gallery::run_stats().await,
        Commands::Open(args) => browse::run(&args).await,
        Commands::Theme(theme_cmd) => theme_cmd.run(),
        Commands::Config(config_cmd) => config_cmd.run(),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "folio", &mut std::io::stdout());
            Ok(())
        }
    }
}
