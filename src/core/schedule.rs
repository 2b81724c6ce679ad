// src/core/schedule.rs

use crate::ingest::dates::parse_schedule_date;
use crate::ingest::ingestor::{DEPARTMENT_COLUMN, UNIVERSITY_COLUMN};
use crate::ingest::Workbook;
use crate::models::{CellValue, DATE_COLUMN, Record};
use crate::utils::date::long_date;
use chrono::{Datelike, Duration, NaiveDate};

pub const DAY_COLUMN: &str = "Day";
pub const DISPLAY_DATE_COLUMN: &str = "Display Date";

/// Resolved rows for one target date; empty means "no classes found".
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleDay {
    pub date: NaiveDate,
    pub rows: Vec<Record>,
}

/// Monday..Saturday of the week containing `reference` (a Sunday belongs to
/// the week that started six days earlier).
pub fn get_week_dates(reference: NaiveDate) -> Vec<NaiveDate> {
    let monday = reference - Duration::days(reference.weekday().num_days_from_monday() as i64);
    (0..6).map(|i| monday + Duration::days(i)).collect()
}

/// Rows of every sheet with a `Date` column whose date equals `date`.
///
/// Cells that parse in neither format simply never match.
pub fn resolve_day(workbook: &Workbook, date: NaiveDate, university: &str) -> ScheduleDay {
    let weekday = date.format("%A").to_string();
    let display = long_date(&date);
    let mut rows = Vec::new();

    for sheet in &workbook.sheets {
        let Some(date_idx) = sheet.column_index(DATE_COLUMN) else {
            continue;
        };

        for row in &sheet.rows {
            let cell = row.get(date_idx).unwrap_or(&CellValue::Empty);
            if parse_schedule_date(cell) != Some(date) {
                continue;
            }

            let mut record = Record::from_row(&sheet.columns, row);
            record.set(DEPARTMENT_COLUMN, CellValue::text(&sheet.name));
            record.set(DAY_COLUMN, CellValue::text(&weekday));
            record.set(UNIVERSITY_COLUMN, CellValue::text(university));
            record.set(DISPLAY_DATE_COLUMN, CellValue::text(&display));
            rows.push(record);
        }
    }

    ScheduleDay { date, rows }
}

/// Day/Week Schedule Resolver over several dates, in the order given.
pub fn resolve(workbook: &Workbook, dates: &[NaiveDate], university: &str) -> Vec<ScheduleDay> {
    dates
        .iter()
        .map(|d| resolve_day(workbook, *d, university))
        .collect()
}

/// All resolved rows, concatenated across days.
pub fn flatten(days: &[ScheduleDay]) -> Vec<Record> {
    days.iter().flat_map(|d| d.rows.iter().cloned()).collect()
}
