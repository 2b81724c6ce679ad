//! acadcal library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! ingestion / grouping / rendering modules behind it.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Sheets { .. } => cli::commands::sheets::handle(&cli.command, cfg),
        Commands::Calendar { .. } => cli::commands::calendar::handle(&cli.command, cfg),
        Commands::Day { .. } => cli::commands::day::handle(&cli.command, cfg),
        Commands::Schedule { .. } => cli::commands::schedule::handle(&cli.command, cfg),
        Commands::Course { .. } => cli::commands::course::handle(&cli.command, cfg),
        Commands::Browse { .. } => cli::commands::browse::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ init must work even when the current file is broken
    if let Commands::Init { .. } = cli.command {
        return cli::commands::init::handle(&cli);
    }

    // 3️⃣ load config once
    let mut cfg = Config::load(&cli::config_path(&cli))?;

    // 4️⃣ command-line override of the university label
    if let Some(university) = &cli.university {
        cfg.university = university.clone();
    }

    dispatch(&cli, &cfg)
}
