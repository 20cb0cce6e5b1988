pub mod app_loop;
pub mod cli;
pub mod config_file;
pub mod seed;

pub const APP_NAME: &str = "Delve";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}
