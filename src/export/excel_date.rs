// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Excel serial and number format for text that looks like a schedule date.
///
/// Midnight timestamps (how workbook dates come back) are written as plain dates.
pub(crate) fn excel_date_value(s: &str) -> Option<(&'static str, f64)> {
    let s = s.trim();

    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        let fmt = if dt.num_seconds_from_midnight() == 0 {
            "yyyy-mm-dd"
        } else {
            "yyyy-mm-dd hh:mm"
        };
        return Some((fmt, excel_serial(&dt)?));
    }

    for fmt in ["%Y-%m-%d", "%d-%m-%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(("yyyy-mm-dd", excel_serial(&d.and_hms_opt(0, 0, 0)?)?));
        }
    }

    None
}

fn excel_serial(dt: &NaiveDateTime) -> Option<f64> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let secs = (*dt - epoch).num_seconds() as f64;
    Some(secs / 86400.0)
}
