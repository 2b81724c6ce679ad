// src/core/session.rs

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::ViewState;
use crate::utils::date::{parse_date, parse_month};
use chrono::NaiveDate;

/// One user interaction of the `browse` session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    NextMonth,
    PrevMonth,
    Month(u32),
    Year(i32),
    Select(NaiveDate),
    Today,
    Search(String),
    Reload,
    Help,
    Quit,
}

impl Interaction {
    pub fn parse(line: &str) -> AppResult<Self> {
        let line = line.trim();
        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((c, a)) => (c, a.trim()),
            None => (line, ""),
        };

        match cmd.to_lowercase().as_str() {
            "next" | "n" => Ok(Interaction::NextMonth),
            "prev" | "p" => Ok(Interaction::PrevMonth),
            "month" | "m" => Ok(Interaction::Month(parse_month(arg)?)),
            "year" | "y" => arg
                .parse::<i32>()
                .map(Interaction::Year)
                .map_err(|_| AppError::Other(format!("invalid year: {arg}"))),
            "select" | "s" => Ok(Interaction::Select(parse_date(arg)?)),
            "today" | "t" => Ok(Interaction::Today),
            "search" | "f" => Ok(Interaction::Search(arg.to_string())),
            "reload" | "r" => Ok(Interaction::Reload),
            "help" | "h" | "?" => Ok(Interaction::Help),
            "quit" | "q" | "exit" => Ok(Interaction::Quit),
            other => Err(AppError::Other(format!("unknown command: {other}"))),
        }
    }

    /// True when the month grid and detail panel must be redrawn.
    pub fn changes_view(&self) -> bool {
        matches!(
            self,
            Interaction::NextMonth
                | Interaction::PrevMonth
                | Interaction::Month(_)
                | Interaction::Year(_)
                | Interaction::Select(_)
                | Interaction::Today
                | Interaction::Reload
        )
    }
}

/// Next view state after `interaction`. Years stay within the configured range.
pub fn apply(state: ViewState, interaction: &Interaction, today: NaiveDate, cfg: &Config) -> AppResult<ViewState> {
    let next = match interaction {
        Interaction::NextMonth => state.next_month(),
        Interaction::PrevMonth => state.prev_month(),
        Interaction::Month(m) => state.show_month(state.year, *m),
        Interaction::Year(y) => state.show_month(*y, state.month),
        // selezione esplicita: mostra anche il mese della data
        Interaction::Select(d) => ViewState::at(*d),
        Interaction::Today => ViewState::at(today),
        Interaction::Search(_) | Interaction::Reload | Interaction::Help | Interaction::Quit => {
            state
        }
    };

    cfg.check_year(next.year)?;
    Ok(next)
}

pub const HELP: &str = "\
Commands:
  next | prev           move one month forward / back
  month <name|1-12>     show another month of the current year
  year <YYYY>           show the current month of another year
  select <YYYY-MM-DD>   select a day (and show its month)
  today                 select today
  search <term>         look up a course
  reload                re-read the workbook
  help                  this text
  quit                  leave";
