use crate::cli::commands::open_workbook;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::schedule::{flatten, resolve};
use crate::errors::AppResult;
use crate::export::{ExportLogic, ScheduleTable};
use crate::ui::messages::{header, info};
use crate::utils::date::{long_date, parse_date, today};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule {
        file,
        mode,
        date,
        export,
        file_out,
        force,
    } = cmd
    {
        let date = date.as_deref().map(parse_date).transpose()?;
        let dates = mode.target_dates(today(), date)?;

        let loaded = open_workbook(file, cfg)?;
        let days = resolve(&loaded.workbook, &dates, &loaded.university);

        header(format!("{} schedule – {}", mode.label(), loaded.university));

        for day in &days {
            println!("\n🗓️  {}", long_date(&day.date));
            if day.rows.is_empty() {
                info("No classes found.");
                continue;
            }

            let t = ScheduleTable::from_records(&day.rows);
            let mut table = Table::new(t.headers.clone());
            for row in t.rows {
                table.add_row(row);
            }
            print!("{}", table.render());
        }

        if let Some(format) = export {
            let table = ScheduleTable::from_records(&flatten(&days));
            ExportLogic::export(&table, *format, file_out.as_deref(), &dates, *force)?;
        }
    }
    Ok(())
}
