//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Credential-and-download helper for the GitHub API.
///
/// Obtains an OAuth access token (environment override, keyring cache, or
/// interactive device flow), then fetches a repository file or the latest
/// release asset with it.
#[derive(Parser, Debug)]
#[command(name = "hubfetch")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Skip opening the browser during the device flow.
    #[arg(long, global = true)]
    pub no_browser: bool,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download a single repository file.
    ///
    /// Fetches the file via the contents API, decodes it, and writes it to
    /// --output or to the file's base name in the current directory.
    File {
        /// Repository owner (organization or user).
        org: String,

        /// Repository name.
        repo: String,

        /// Path of the file inside the repository.
        path: String,

        /// Output path (defaults to the file's base name in the current directory).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Branch to fetch from.
        #[arg(short, long, default_value = "main")]
        branch: String,
    },

    /// Download an asset from the latest release.
    ///
    /// Picks the first asset whose name ends with --suffix and downloads it
    /// to the system temp directory. With --install-with, runs the given
    /// command on the downloaded file and removes it afterward.
    Asset {
        /// Repository owner (organization or user).
        org: String,

        /// Repository name.
        repo: String,

        /// Filename suffix used to select the asset.
        #[arg(short, long, default_value = ".whl")]
        suffix: String,

        /// Command to run on the downloaded asset (the path is appended).
        #[arg(long, value_name = "CMD")]
        install_with: Option<String>,

        /// Keep the downloaded file after a successful install.
        #[arg(long)]
        keep: bool,
    },

    /// Manage cached authentication.
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
}

/// Authentication subcommands.
#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Run the device flow and cache the token for a repository.
    Login {
        /// Repository name the token is cached under.
        repo: String,
    },

    /// Remove the cached token for a repository.
    Logout {
        /// Repository name the token is cached under.
        repo: String,
    },

    /// Show which tier would supply a token for a repository.
    Status {
        /// Repository name the token is cached under.
        repo: String,
    },
}
