//! pageset CLI - keeps folders of generated embed pages in sync.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "pageset")]
#[command(about = "Generate embed pages and index documents from page lists")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to pageset.toml config file
    #[arg(short, long, default_value = "pageset.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter config with the bundled page lists
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate pages and index documents for every section
    Sync {
        /// Only synchronize the section with this folder
        #[arg(short, long)]
        section: Option<String>,
    },

    /// Print the link grid for a folder of generated documents
    Index {
        /// Folder to scan
        folder: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. The index grid shares stdout with the log output,
    // so that command stays quiet unless verbose.
    let filter = match (&cli.command, cli.verbose) {
        (_, true) => EnvFilter::new("debug"),
        (Commands::Index { .. }, false) => EnvFilter::new("warn"),
        _ => EnvFilter::new("info"),
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Sync { section } => {
            commands::sync::run(&cli.config, section.as_deref())?;
        }
        Commands::Index { folder } => {
            commands::index::run(&cli.config, &folder)?;
        }
    }

    Ok(())
}
