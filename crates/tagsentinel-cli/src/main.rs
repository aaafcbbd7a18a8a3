//! tagsentinel CLI - RFID tag anomaly detection from the command line.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "tagsentinel")]
#[command(author, version, about = "tagsentinel - Unsupervised RFID tag anomaly detection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (model fitting and per-tag debug logs)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit on the training list and run the normal and anomaly test lists
    Run {
        /// Test-data JSON file (default: from tagsentinel.toml, then test/test_data.json)
        config: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate identifiers against a training set
    Validate {
        /// Test-data JSON file whose normalRfids are used for training
        #[arg(short, long)]
        training: Option<PathBuf>,

        /// Identifiers to validate
        ids: Vec<String>,

        /// Print one JSON object per identifier
        #[arg(long)]
        json: bool,
    },

    /// Show the fitted per-feature parameters and threshold
    Model {
        /// Test-data JSON file
        config: Option<PathBuf>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write sample test data and settings
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}

impl Commands {
    /// `init` writes settings, so it must not depend on reading them.
    fn uses_settings(&self) -> bool {
        !matches!(self, Commands::Init { .. })
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = if cli.command.uses_settings() {
        Settings::load()?
    } else {
        Settings::default()
    };
    if !settings.output.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Run { config, json } => {
            commands::run::run(&settings.data_path(config), &settings, json)
        }
        Commands::Validate { training, ids, json } => {
            commands::validate::run(&settings.data_path(training), &ids, json)
        }
        Commands::Model { config, json } => commands::model::run(&settings.data_path(config), json),
        Commands::Init { path } => commands::init::run(path),
    }
}
