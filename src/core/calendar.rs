// src/core/calendar.rs

use crate::config::{Config, StarredKeyword};
use crate::core::grouper::GroupedEvents;
use crate::errors::{AppError, AppResult};
use crate::models::Marker;
use crate::utils::date::month_name;
use crate::utils::formatting::{pad_right_visible, visible_width};
use ansi_term::{Colour, Style};
use chrono::{Datelike, Duration, NaiveDate};

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Narrowest cell; wider when a day carries many markers
const MIN_CELL_WIDTH: usize = 10;

/// One day of the month grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// False for the leading/trailing days borrowed from adjacent months
    pub in_month: bool,
    pub markers: Vec<Marker>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Sunday-first weeks, always seven cells each
    pub weeks: Vec<Vec<DayCell>>,
}

impl MonthGrid {
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten()
    }
}

/// Dates of the full Sunday-first weeks that cover `year`-`month`.
pub fn month_dates(year: i32, month: u32) -> AppResult<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::InvalidMonth(format!("{year}-{month}")))?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| AppError::InvalidMonth(format!("{year}-{month}")))?;
    let last = next_first - Duration::days(1);

    let start = first - Duration::days(first.weekday().num_days_from_sunday() as i64);
    let end = last + Duration::days(6 - last.weekday().num_days_from_sunday() as i64);

    let mut out = Vec::new();
    let mut d = start;
    while d <= end {
        out.push(d);
        d += Duration::days(1);
    }
    Ok(out)
}

/// Markers for one day: class dot, one marker per starred special day, named-day star.
pub fn markers_for(date: &NaiveDate, grouped: &GroupedEvents, starred: &[StarredKeyword]) -> Vec<Marker> {
    let mut markers = Vec::new();

    if !grouped.events_on(date).is_empty() {
        markers.push(Marker::Class);
    }

    for special in grouped.specials_on(date) {
        let event_type = special.text_or("Event Type", "").to_lowercase();
        // solo la prima keyword che corrisponde
        if let Some(k) = starred
            .iter()
            .find(|k| event_type.contains(&k.keyword.to_lowercase()))
        {
            markers.push(Marker::Starred {
                keyword: k.keyword.clone(),
                symbol: k.marker.clone(),
            });
        }
    }

    if !grouped.named_days_on(date).is_empty() {
        markers.push(Marker::NamedDay);
    }

    markers
}

/// Calendar Renderer: the marked month grid.
pub fn build_month(
    year: i32,
    month: u32,
    grouped: &GroupedEvents,
    starred: &[StarredKeyword],
) -> AppResult<MonthGrid> {
    let cells: Vec<DayCell> = month_dates(year, month)?
        .into_iter()
        .map(|date| DayCell {
            date,
            in_month: date.month() == month && date.year() == year,
            markers: markers_for(&date, grouped, starred),
        })
        .collect();

    let weeks = cells.chunks(7).map(|w| w.to_vec()).collect();

    Ok(MonthGrid { year, month, weeks })
}

/// Text rendering of the grid; `selected` is shown in reverse video.
pub fn render_grid(grid: &MonthGrid, cfg: &Config, selected: NaiveDate) -> String {
    let cell_text = |cell: &DayCell| {
        let symbols: Vec<&str> = cell.markers.iter().map(|m| m.symbol(cfg)).collect();
        format!("{:>2} {}", cell.date.day(), symbols.join(""))
    };

    // una colonna di spazio dopo la cella più larga
    let width = grid
        .cells()
        .map(|c| visible_width(&cell_text(c)) + 1)
        .max()
        .unwrap_or(0)
        .max(MIN_CELL_WIDTH);

    let mut out = String::new();

    out.push_str(&format!("{} {}\n", month_name(grid.month), grid.year));
    for label in WEEKDAY_LABELS {
        out.push_str(&pad_right_visible(label, width));
    }
    out.push('\n');

    for week in &grid.weeks {
        for cell in week {
            let text = cell_text(cell);

            let styled = if cell.date == selected {
                Style::new().reverse().paint(text).to_string()
            } else if !cell.in_month {
                Colour::Fixed(8).paint(text).to_string()
            } else {
                text
            };
            out.push_str(&pad_right_visible(&styled, width));
        }
        out.push('\n');
    }

    out
}

/// Legend lines for every marker the grid may show.
pub fn render_legend(cfg: &Config) -> Vec<String> {
    let mut lines = vec![format!("{} : Regular Class", cfg.class_marker)];
    lines.extend(
        cfg.starred_keywords
            .iter()
            .map(|k| format!("{} : {}", k.marker, k.label)),
    );
    lines.push(format!("{} : National/Special Day", cfg.named_day_marker));
    lines
}
