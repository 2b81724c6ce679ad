use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDate};
use clap::ValueEnum;

/// How the schedule command picks its target dates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DateMode {
    Today,
    Tomorrow,
    /// A single date given with `--date`
    Custom,
    /// Monday..Saturday of the week containing `--date` (default today)
    #[value(name = "week")]
    ThisWeek,
}

impl DateMode {
    pub fn label(&self) -> &'static str {
        match self {
            DateMode::Today => "Today",
            DateMode::Tomorrow => "Tomorrow",
            DateMode::Custom => "Custom Date",
            DateMode::ThisWeek => "This Week",
        }
    }

    /// Target dates for this mode, given today's date and an optional explicit date.
    pub fn target_dates(&self, today: NaiveDate, date: Option<NaiveDate>) -> AppResult<Vec<NaiveDate>> {
        match self {
            DateMode::Today => Ok(vec![today]),
            DateMode::Tomorrow => Ok(vec![today + Duration::days(1)]),
            DateMode::Custom => date.map(|d| vec![d]).ok_or_else(|| {
                AppError::InvalidMode("custom mode needs --date YYYY-MM-DD".to_string())
            }),
            DateMode::ThisWeek => Ok(crate::core::schedule::get_week_dates(date.unwrap_or(today))),
        }
    }
}
