pub mod browse;
pub mod calendar;
pub mod config;
pub mod course;
pub mod day;
pub mod init;
pub mod schedule;
pub mod sheets;

use crate::config::Config;
use crate::errors::AppResult;
use crate::ingest::{LoadedWorkbook, WorkbookCache, load_file};
use std::path::Path;
use std::sync::Arc;

/// One-shot load for the single-view commands.
pub(crate) fn open_workbook(file: &str, cfg: &Config) -> AppResult<Arc<LoadedWorkbook>> {
    let mut cache = WorkbookCache::new(cfg.cache_capacity, cfg.course_layout.clone());
    load_file(Path::new(file), &cfg.university, &mut cache)
}
