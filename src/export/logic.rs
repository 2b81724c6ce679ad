// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ScheduleTable};
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::PathBuf;

/// High-level export of resolved schedule rows.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `table` in `format`.
    ///
    /// - `file`: explicit output path; when `None` the name embeds the date range
    ///   (see [`default_file_name`]) and lands in the current directory
    /// - `dates`: target dates of the schedule, in query order
    ///
    /// Returns the written path, or `None` when there was nothing to export.
    pub fn export(
        table: &ScheduleTable,
        format: ExportFormat,
        file: Option<&str>,
        dates: &[NaiveDate],
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        if table.is_empty() {
            warning("No classes found for the selected dates, nothing to export.");
            return Ok(None);
        }

        let path = match file {
            Some(f) => PathBuf::from(f),
            None => PathBuf::from(default_file_name(dates, format)?),
        };

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(table, &path)?,
            ExportFormat::Json => export_json(table, &path)?,
            ExportFormat::Xlsx => export_xlsx(table, &path)?,
        }

        Ok(Some(path))
    }
}

/// `schedule_<date>.<ext>` for one day, `schedule_<first>_to_<last>.<ext>` otherwise.
pub fn default_file_name(dates: &[NaiveDate], format: ExportFormat) -> AppResult<String> {
    let (Some(first), Some(last)) = (dates.iter().min(), dates.iter().max()) else {
        return Err(AppError::Export("no dates to name the export after".to_string()));
    };

    let range = if first == last {
        first.format("%Y-%m-%d").to_string()
    } else {
        format!("{}_to_{}", first.format("%Y-%m-%d"), last.format("%Y-%m-%d"))
    };

    Ok(format!("schedule_{range}.{}", format.as_str()))
}
