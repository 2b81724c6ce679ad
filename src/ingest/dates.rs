// src/ingest/dates.rs

use crate::models::CellValue;
use chrono::{NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

// Month-first before day-first for ambiguous slashed dates.
const DATE_FORMATS: [&str; 9] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

/// Best-effort timestamp of a `Date` cell, used by the ingestor.
///
/// Never fails: anything unrecognised (numbers, booleans, free text) is `None`.
pub fn parse_cell_datetime(cell: &CellValue) -> Option<NaiveDateTime> {
    match cell {
        CellValue::DateTime(dt) => Some(*dt),
        CellValue::Text(s) => parse_text_datetime(s.trim()),
        _ => None,
    }
}

fn parse_text_datetime(s: &str) -> Option<NaiveDateTime> {
    if s.is_empty() {
        return None;
    }

    for fmt in DATETIME_FORMATS.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in DATE_FORMATS.iter() {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Date of a timetable cell as the day/week resolver reads it.
///
/// Two formats, in order: `YYYY-MM-DD HH:MM:SS` on the whole text, then
/// `DD-MM-YYYY` on the text before a `" - "` suffix (e.g. `12-06-2024 - Wed`).
pub fn parse_schedule_date(cell: &CellValue) -> Option<NaiveDate> {
    let text = cell.to_string();
    let text = text.trim();

    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }

    let head = text.split(" - ").next().unwrap_or(text).trim();
    NaiveDate::parse_from_str(head, "%d-%m-%Y").ok()
}
