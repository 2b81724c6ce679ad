use crate::cli::commands::open_workbook;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{build_month, render_grid, render_legend};
use crate::core::detail::{detail_panel, render_panel};
use crate::core::{GroupedEvents, group};
use crate::errors::AppResult;
use crate::models::ViewState;
use crate::utils::date::{parse_date, parse_month, today};
use crate::utils::formatting::bold;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar {
        file,
        year,
        month,
        select,
    } = cmd
    {
        let selected = match select {
            Some(s) => parse_date(s)?,
            None => today(),
        };

        let start = ViewState::at(selected);
        let year = cfg.check_year(year.unwrap_or(start.year))?;
        let month = match month {
            Some(m) => parse_month(m)?,
            None => start.month,
        };
        let state = start.show_month(year, month);

        let loaded = open_workbook(file, cfg)?;
        let grouped = group(&loaded.tables);

        print_view(&state, &grouped, cfg, &loaded.university)?;
    }
    Ok(())
}

/// Month grid, legend and detail panel for `state`.
pub(crate) fn print_view(
    state: &ViewState,
    grouped: &GroupedEvents,
    cfg: &Config,
    university: &str,
) -> AppResult<()> {
    let grid = build_month(state.year, state.month, grouped, &cfg.starred_keywords)?;

    println!("📅 {}", bold(university));
    println!();
    print!("{}", render_grid(&grid, cfg, state.selected));
    println!();
    println!("Legend: {}", render_legend(cfg).join("   "));
    println!();
    print!("{}", render_panel(&state.selected, &detail_panel(&state.selected, grouped)));

    Ok(())
}
