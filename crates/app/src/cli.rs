//! Command-line arguments for the desktop binary.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "delve", about = "A turn-based dungeon crawler", version)]
pub struct Cli {
    /// Fixed RNG seed for a reproducible run. Overrides the config file.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML config file; defaults apply when omitted.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
