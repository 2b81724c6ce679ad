// src/ingest/workbook.rs

use crate::errors::AppResult;
use crate::models::CellValue;
use calamine::{Data, Reader, open_workbook_auto_from_rs};
use chrono::{NaiveDate, NaiveDateTime};
use std::io::Cursor;

/// One named table of the workbook. The first spreadsheet row is the header.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// Column names are trimmed here, once, for every consumer.
    pub fn new(name: &str, columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            name: name.to_string(),
            columns: columns.into_iter().map(|c| c.trim().to_string()).collect(),
            rows,
        }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// Ordered collection of named sheets, as uploaded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    /// Open an xlsx/xls/xlsb/ods byte stream.
    pub fn from_bytes(bytes: &[u8]) -> AppResult<Self> {
        let cursor = Cursor::new(bytes.to_vec());
        let mut reader = open_workbook_auto_from_rs(cursor)?;

        let mut sheets = Vec::new();
        for name in reader.sheet_names() {
            let range = reader.worksheet_range(&name)?;
            let mut rows = range.rows();

            let columns: Vec<String> = match rows.next() {
                Some(header) => header.iter().map(|c| c.to_string()).collect(),
                None => Vec::new(),
            };

            // righe completamente vuote: non sono dati
            let body: Vec<Vec<CellValue>> = rows
                .map(|row| row.iter().map(CellValue::from).collect::<Vec<_>>())
                .filter(|row| !row.iter().all(CellValue::is_blank))
                .collect();

            sheets.push(Sheet::new(&name, columns, body));
        }

        Ok(Self { sheets })
    }
}

/// Backend cell to `CellValue`.
///
/// Excel serials below one day (time-only formats) and durations become
/// `HH:MM:SS` text, never a date in 1899.
impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty | Data::Error(_) => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Float(f) => CellValue::Number(*f),
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) if dt.is_duration() || dt.as_f64() < 1.0 => {
                CellValue::Text(time_text(dt.as_f64()))
            }
            Data::DateTime(dt) => dt
                .as_datetime()
                .map(CellValue::DateTime)
                .unwrap_or(CellValue::Number(dt.as_f64())),
            Data::DateTimeIso(s) => parse_iso_datetime(s)
                .map(CellValue::DateTime)
                .unwrap_or_else(|| CellValue::Text(s.clone())),
            Data::DurationIso(s) => CellValue::Text(s.clone()),
        }
    }
}

/// Fraction of a day as `HH:MM:SS`; hours may exceed 23 for durations.
fn time_text(days: f64) -> String {
    let secs = (days * 86_400.0).round().max(0.0) as i64;
    format!("{:02}:{:02}:{:02}", secs / 3600, secs % 3600 / 60, secs % 60)
}

// ODS date-value: "2024-06-12" oppure "2024-06-12T09:00:00[.fff]"
fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
