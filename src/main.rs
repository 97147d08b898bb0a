use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing::warn;

mod client;
mod commands;
mod constants;
mod domain;
mod logging;
mod state;
mod theme;
mod tui;
mod ui;
mod widgets;

#[cfg(test)]
mod test_utils;

use crate::domain::hash_password;
use crate::state::{App, AppConfig, StartupOptions};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const LOGO: &str = r"
       _   _          _           _
   ___| |_| |__   ___| |_   _ ___| |_ ___ _ __
  / _ \ __| '_ \ / __| | | | / __| __/ _ \ '__|
 |  __/ |_| | | | (__| | |_| \__ \ ||  __/ |
  \___|\__|_| |_|\___|_|\__,_|___/\__\___|_|
";

/// ethcluster - Terminal UI for Ethereum address clustering
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Clustering server base URL (overrides the config file)
    #[arg(short, long, value_name = "URL")]
    server: Option<String>,

    /// Address whose cluster is loaded on startup
    #[arg(short, long, value_name = "ADDRESS")]
    address: Option<String>,

    /// Load a cluster graph from a local JSON file instead of the server
    #[arg(short, long, value_name = "FILE")]
    graph: Option<PathBuf>,

    /// Log file location
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display version with ASCII art
    Version,
    /// Print the hash sent to the server for a password
    HashPassword {
        /// Plain-text password
        password: String,
    },
}

/// Handles subcommands. Returns `true` if one ran and the app should exit.
fn handle_cli_commands(cli: &Cli) -> bool {
    match &cli.command {
        Some(Commands::Version) => {
            println!("{LOGO}");
            println!("ethcluster v{VERSION}");
            println!("A terminal UI for exploring Ethereum address clusters");
            true
        }
        Some(Commands::HashPassword { password }) => {
            println!("{}", hash_password(password));
            true
        }
        None => false,
    }
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if handle_cli_commands(&cli) {
        return Ok(());
    }

    color_eyre::install()?;

    let log_path = cli.log_file.clone().unwrap_or_else(AppConfig::default_log_path);
    if let Err(e) = logging::init(&log_path) {
        eprintln!("Logging disabled: {e}");
    }

    let config = AppConfig::load();
    let startup = StartupOptions {
        server: cli.server,
        address: cli.address,
        graph_file: cli.graph,
    };
    let mut app = App::new(startup, config)?;

    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal).await;

    if let Err(e) = tui::restore() {
        warn!("Failed to restore terminal: {e}");
    }
    result
}
