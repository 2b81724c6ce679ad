use crate::config::Config;

/// Category marker shown inside a month-grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// At least one timetable event on the day.
    Class,
    /// A special day whose `Event Type` contains a starred keyword.
    Starred { keyword: String, symbol: String },
    /// At least one important/named day.
    NamedDay,
}

impl Marker {
    pub fn symbol<'a>(&'a self, cfg: &'a Config) -> &'a str {
        match self {
            Marker::Class => &cfg.class_marker,
            Marker::Starred { symbol, .. } => symbol,
            Marker::NamedDay => &cfg.named_day_marker,
        }
    }

    pub fn is_starred(&self, keyword: &str) -> bool {
        matches!(self, Marker::Starred { keyword: k, .. } if k.eq_ignore_ascii_case(keyword))
    }
}
