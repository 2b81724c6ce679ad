use crate::cli::parser::Commands;
use crate::cli::commands::open_workbook;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ingest::CourseSheet;
use crate::ui::messages::{header, info, warning};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sheets { file } = cmd {
        let loaded = open_workbook(file, cfg)?;
        let report = &loaded.tables.report;

        header(format!("Sheets of {file}"));

        if report.sheets.is_empty() {
            info("The workbook has no sheets.");
            return Ok(());
        }

        let mut table = Table::new(
            ["Sheet", "Kind", "Rows", "Kept", "Bad dates", "Header rows"]
                .iter()
                .map(|h| h.to_string())
                .collect(),
        );

        for s in &report.sheets {
            table.add_row(vec![
                s.name.clone(),
                s.kind.to_string(),
                s.rows.to_string(),
                s.kept.to_string(),
                s.bad_dates.to_string(),
                s.header_rows.to_string(),
            ]);
        }

        print!("{}", table.render());

        if let CourseSheet::Invalid { sheet, missing } = &loaded.tables.courses {
            warning(format!(
                "Course sheet '{sheet}' is missing columns: {}",
                missing.join(", ")
            ));
        }

        info(format!(
            "{} timetable row(s), {} special day(s), {} important day(s)",
            loaded.tables.timetable.len(),
            loaded.tables.special_days.len(),
            loaded.tables.important_days.len()
        ));
    }
    Ok(())
}
