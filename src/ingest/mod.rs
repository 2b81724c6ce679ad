// src/ingest/mod.rs

pub mod cache;
pub mod dates;
pub mod ingestor;
pub mod workbook;

pub use cache::{LoadedWorkbook, WorkbookCache, content_digest};
pub use ingestor::{CourseSheet, IngestReport, IngestedTables, SheetReport, ingest};
pub use workbook::{Sheet, Workbook};

use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Read `path` and load it through `cache`.
pub fn load_file(
    path: &Path,
    university: &str,
    cache: &mut WorkbookCache,
) -> AppResult<Arc<LoadedWorkbook>> {
    if !path.exists() {
        return Err(AppError::Workbook(format!(
            "file not found: {}",
            path.display()
        )));
    }

    let bytes = fs::read(path)?;
    let loaded = cache
        .get_or_load(&bytes, university)
        .map_err(|e| match e {
            AppError::Workbook(msg) => AppError::Workbook(format!("{}: {msg}", path.display())),
            other => other,
        })?;

    warn_skipped_rows(&loaded.tables.report);
    Ok(loaded)
}

/// Tell the user when rows vanished because of unreadable dates.
pub fn warn_skipped_rows(report: &IngestReport) {
    for s in report.sheets_with_bad_dates() {
        warning(format!(
            "Sheet '{}': {} row(s) skipped because the Date cell could not be read",
            s.name, s.bad_dates
        ));
    }
}
