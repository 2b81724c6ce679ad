use crate::cli::commands::open_workbook;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::detail::{detail_panel, render_panel};
use crate::core::group;
use crate::errors::AppResult;
use crate::utils::date::{parse_date, today};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { file, date } = cmd {
        let date = match date {
            Some(d) => parse_date(d)?,
            None => today(),
        };

        let loaded = open_workbook(file, cfg)?;
        let grouped = group(&loaded.tables);

        print!("{}", render_panel(&date, &detail_panel(&date, &grouped)));
    }
    Ok(())
}
