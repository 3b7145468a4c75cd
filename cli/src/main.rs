//! Hubfetch - GitHub credential-and-download helper
//!
//! Obtains an OAuth access token via a three-tier strategy (environment
//! override, keyring cache, interactive device flow), then downloads a
//! repository file or the latest release asset with it.

mod auth;
mod cli;
mod client;
mod config;
mod error;
mod fetch;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{AuthCommands, Cli, Commands};
use crate::error::Result;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(config::settings::env::LOG_LEVEL)
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Run the command
    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let no_browser = cli.no_browser;
    match cli.command {
        Commands::File {
            org,
            repo,
            path,
            output,
            branch,
        } => cli::commands::handle_file(&org, &repo, &path, output, &branch, no_browser).await,
        Commands::Asset {
            org,
            repo,
            suffix,
            install_with,
            keep,
        } => {
            cli::commands::handle_asset(
                &org,
                &repo,
                &suffix,
                install_with.as_deref(),
                keep,
                no_browser,
            )
            .await
        }
        Commands::Auth { command } => match command {
            AuthCommands::Login { repo } => cli::commands::handle_login(&repo, no_browser).await,
            AuthCommands::Logout { repo } => cli::commands::handle_logout(&repo).await,
            AuthCommands::Status { repo } => cli::commands::handle_status(&repo).await,
        },
    }
}
