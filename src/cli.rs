use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// fnstage - fingerprint endpoints and plan source uploads
#[derive(Parser, Debug)]
#[command(name = "fnstage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./fnstage.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print environment, secrets, source and endpoint fingerprints
    Hash {
        /// Backend manifest (JSON)
        #[arg(short, long)]
        backend: PathBuf,

        /// Packaged archive for generation-1 endpoints
        #[arg(long)]
        source_v1: Option<PathBuf>,

        /// Packaged archive for generation-2 endpoints
        #[arg(long)]
        source_v2: Option<PathBuf>,
    },

    /// Show which source uploads a backend needs
    Plan {
        /// Backend manifest (JSON)
        #[arg(short, long)]
        backend: PathBuf,
    },
}
