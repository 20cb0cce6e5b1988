//! Loading the game config from a TOML file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use delve_core::GameConfig;

/// Reads a `GameConfig` from `path`, or returns the defaults when no path
/// was given. Unset keys fall back to their defaults; validation itself is
/// the core's job at session start.
pub fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let config = toml::from_str(&text)
        .with_context(|| format!("parsing config file {}", path.display()))?;
    Ok(config)
}
