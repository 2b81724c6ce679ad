use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a user-supplied `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Month number from `1`..`12`, a full English name or a three-letter abbreviation.
pub fn parse_month(s: &str) -> AppResult<u32> {
    let t = s.trim();

    if let Ok(n) = t.parse::<u32>() {
        return if (1..=12).contains(&n) {
            Ok(n)
        } else {
            Err(AppError::InvalidMonth(s.to_string()))
        };
    }

    let lower = t.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|m| {
            let m = m.to_lowercase();
            m == lower || (lower.len() == 3 && m.starts_with(&lower))
        })
        .map(|i| i as u32 + 1)
        .ok_or_else(|| AppError::InvalidMonth(s.to_string()))
}

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get((month as usize).wrapping_sub(1))
        .copied()
        .unwrap_or("Unknown")
}

/// e.g. "Wednesday, 12 June 2024"
pub fn long_date(d: &NaiveDate) -> String {
    d.format("%A, %d %B %Y").to_string()
}
