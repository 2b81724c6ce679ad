pub mod commands;
pub mod parser;

use crate::config::Config;
use parser::Cli;
use std::path::PathBuf;

/// Configuration file in use: `--config` or the platform default.
pub fn config_path(cli: &Cli) -> PathBuf {
    cli.config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file)
}
