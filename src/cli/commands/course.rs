use crate::cli::commands::open_workbook;
use crate::cli::parser::Commands;
use crate::config::{Config, CourseLayout};
use crate::core::course::{extract, find_first, render_course};
use crate::errors::{AppError, AppResult};
use crate::ingest::CourseSheet;
use crate::ui::messages::{info, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Course { file, term } = cmd {
        let loaded = open_workbook(file, cfg)?;
        lookup_and_print(&loaded.tables.courses, &cfg.course_layout, term)?;
    }
    Ok(())
}

/// Course Lookup as shown to the user: first match, or an informational "nothing found".
///
/// A broken sheet layout is an error; a matched row missing a required
/// field is only a warning.
pub(crate) fn lookup_and_print(courses: &CourseSheet, layout: &CourseLayout, term: &str) -> AppResult<()> {
    let rows = match courses {
        CourseSheet::Missing => {
            info("This workbook has no 'course details' sheet.");
            return Ok(());
        }
        CourseSheet::Invalid { sheet, missing } => {
            return Err(AppError::UnexpectedLayout(format!(
                "sheet '{sheet}' lacks column(s): {}",
                missing.join(", ")
            )));
        }
        CourseSheet::Valid(rows) => rows,
    };

    let Some((index, record)) = find_first(rows, term) else {
        info(format!("No course matches '{}'.", term.trim()));
        return Ok(());
    };

    match extract(record, layout) {
        Ok(course) => print!("{}", render_course(&course)),
        // riga 1 = header del foglio
        Err(e @ AppError::MissingField(_)) => warning(format!("Row {}: {e}", index + 2)),
        Err(e) => return Err(e),
    }

    Ok(())
}
