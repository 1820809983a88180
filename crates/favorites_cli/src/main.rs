use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod errors;
mod store;

use colored::Colorize;
use store::FileStore;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// gh-favorites CLI: keep a personal list of favorite GitHub accounts
#[derive(Parser)]
#[command(name = "gh-favorites")]
#[command(about = "Keep a personal list of favorite GitHub accounts", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the favorites data file, overriding the configuration
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a GitHub account to the favorites
    Add {
        /// The GitHub login to add
        username: String,
    },

    /// Remove an account from the favorites
    Remove {
        /// The stored login to remove
        login: String,
    },

    /// List the favorites, newest first
    List,

    /// Show the CLI version
    Version,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().pretty())
        .with(EnvFilter::from_env("GH_FAVORITES_LOG"))
        .init();

    let cli = Cli::parse();

    if let Commands::Version = cli.command {
        // Print version info from baked-in value
        println!(
            "gh-favorites version {}",
            option_env!("GH_FAVORITES_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
        );
        std::process::exit(0);
    }

    let app_config = match config::AppConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Error: {e}");
            eprintln!("{}", format!("Error: {e}").red());
            std::process::exit(2);
        }
    };
    let data_dir = config::resolve_data_dir(cli.data_dir.as_deref(), &app_config);
    let store = FileStore::new(data_dir);

    let result = match &cli.command {
        Commands::Add { username } => commands::add_cmd::execute(store, username).await,
        Commands::Remove { login } => commands::remove_cmd::execute(store, login),
        Commands::List => commands::list_cmd::execute(store),
        Commands::Version => unreachable!("handled above"),
    };

    if let Err(e) = result {
        error!("Error: {e}");
        eprintln!("{}", format!("Error: {e}").red());
        std::process::exit(1);
    }
}
