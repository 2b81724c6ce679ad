use chrono::{Datelike, NaiveDate};

/// Session-scoped view state: which month is displayed and which day is selected.
///
/// Interactions never mutate it in place; each one returns the next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub year: i32,
    pub month: u32,
    pub selected: NaiveDate,
}

impl ViewState {
    /// Show the month of `date` with `date` selected.
    pub fn at(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            selected: date,
        }
    }

    /// Display another month, keeping the selection.
    pub fn show_month(self, year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            ..self
        }
    }

    pub fn next_month(self) -> Self {
        if self.month == 12 {
            self.show_month(self.year + 1, 1)
        } else {
            self.show_month(self.year, self.month + 1)
        }
    }

    pub fn prev_month(self) -> Self {
        if self.month == 1 {
            self.show_month(self.year - 1, 12)
        } else {
            self.show_month(self.year, self.month - 1)
        }
    }
}
