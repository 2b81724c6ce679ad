use serde::Serialize;
use std::fmt;

pub const DATE_COLUMN: &str = "Date";

/// Category of a workbook sheet, decided by its name and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SheetKind {
    Timetable,
    SpecialDays,
    ImportantDays,
    CourseDetails,
    Ignored,
}

impl SheetKind {
    /// Sheet names are matched case-insensitively; any other sheet with a
    /// `Date` column is a department timetable.
    pub fn classify(name: &str, columns: &[String]) -> Self {
        let has_date = columns.iter().any(|c| c == DATE_COLUMN);

        match name.trim().to_lowercase().as_str() {
            "special_days" if has_date => SheetKind::SpecialDays,
            "important_days" if has_date => SheetKind::ImportantDays,
            "special_days" | "important_days" => SheetKind::Ignored,
            "course details" => SheetKind::CourseDetails,
            _ if has_date => SheetKind::Timetable,
            _ => SheetKind::Ignored,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SheetKind::Timetable => "timetable",
            SheetKind::SpecialDays => "special days",
            SheetKind::ImportantDays => "important days",
            SheetKind::CourseDetails => "course details",
            SheetKind::Ignored => "ignored",
        }
    }
}

impl fmt::Display for SheetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
