//! fnstage CLI
//!
//! Usage: fnstage <COMMAND>
//!
//! Commands:
//!   hash    Print endpoint fingerprints for a backend manifest
//!   plan    Show which source uploads a backend needs

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fnstage::config::{self, Config, ConfigWarning, Verbosity};

mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, warnings) = load_config(&cli)?;
    init_tracing(config.output.verbosity.raised_by(cli.verbose));
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    match cli.command {
        Commands::Hash {
            backend,
            source_v1,
            source_v2,
        } => commands::hash::cmd_hash(&backend, source_v1, source_v2, cli.json).await,
        Commands::Plan { backend } => commands::plan::cmd_plan(&backend, &config, cli.json),
    }
}

fn load_config(cli: &Cli) -> Result<(Config, Vec<ConfigWarning>)> {
    match &cli.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)?;
            Ok((config::with_env_overrides(config), warnings))
        }
        None => {
            let project_root = std::env::current_dir()?;
            Ok((Config::load_or_default(Some(&project_root)), Vec::new()))
        }
    }
}

/// `RUST_LOG` wins over the configured verbosity
fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
