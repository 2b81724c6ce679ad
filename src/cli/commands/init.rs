use crate::cli::config_path;
use crate::cli::parser::{Cli, Commands};
use crate::errors::AppResult;
use crate::config::Config;
use crate::ui::messages::{success, warning};

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path = config_path(cli);

        if Config::init_at(&path, *force)? {
            success(format!("Config file: {}", path.display()));
        } else {
            warning(format!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            ));
        }
    }
    Ok(())
}
