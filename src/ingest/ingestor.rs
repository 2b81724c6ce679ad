// src/ingest/ingestor.rs

use crate::config::CourseLayout;
use crate::ingest::dates::parse_cell_datetime;
use crate::ingest::workbook::{Sheet, Workbook};
use crate::models::{CellValue, DATE_COLUMN, DatedRecord, Record, SheetKind};

pub const DEPARTMENT_COLUMN: &str = "Department";
pub const UNIVERSITY_COLUMN: &str = "University";

/// What happened to one sheet during ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetReport {
    pub name: String,
    pub kind: SheetKind,
    pub rows: usize,
    pub kept: usize,
    /// Rows dropped because `Date` did not parse
    pub bad_dates: usize,
    /// Repeated header rows (`Date` cell equal to "Date") dropped
    pub header_rows: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct IngestReport {
    pub sheets: Vec<SheetReport>,
}

impl IngestReport {
    pub fn total_bad_dates(&self) -> usize {
        self.sheets.iter().map(|s| s.bad_dates).sum()
    }

    /// Sheets that lost at least one row to an unparseable date.
    pub fn sheets_with_bad_dates(&self) -> impl Iterator<Item = &SheetReport> {
        self.sheets.iter().filter(|s| s.bad_dates > 0)
    }
}

/// State of the course sheet after layout validation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CourseSheet {
    #[default]
    Missing,
    /// Sheet present but the named columns are not all there
    Invalid { sheet: String, missing: Vec<String> },
    Valid(Vec<Record>),
}

/// Normalised output of one workbook load.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IngestedTables {
    pub timetable: Vec<DatedRecord>,
    pub special_days: Vec<DatedRecord>,
    pub important_days: Vec<DatedRecord>,
    pub courses: CourseSheet,
    pub report: IngestReport,
}

/// Workbook Ingestor: classify each sheet, normalise its dates, stamp timetable rows.
///
/// Pure function of its inputs. Malformed cells drop their row, they never fail the load.
pub fn ingest(workbook: &Workbook, university: &str, layout: &CourseLayout) -> IngestedTables {
    let mut tables = IngestedTables::default();

    for sheet in &workbook.sheets {
        let kind = SheetKind::classify(&sheet.name, &sheet.columns);

        let report = match kind {
            SheetKind::Timetable => {
                let (rows, report) = normalise_dated(sheet, kind, Some(university));
                tables.timetable.extend(rows);
                report
            }
            SheetKind::SpecialDays => {
                let (rows, report) = normalise_dated(sheet, kind, None);
                tables.special_days.extend(rows);
                report
            }
            SheetKind::ImportantDays => {
                let (rows, report) = normalise_dated(sheet, kind, None);
                tables.important_days.extend(rows);
                report
            }
            SheetKind::CourseDetails => {
                tables.courses = validate_courses(sheet, layout);
                let kept = match &tables.courses {
                    CourseSheet::Valid(rows) => rows.len(),
                    _ => 0,
                };
                SheetReport {
                    name: sheet.name.clone(),
                    kind,
                    rows: sheet.rows.len(),
                    kept,
                    bad_dates: 0,
                    header_rows: 0,
                }
            }
            SheetKind::Ignored => SheetReport {
                name: sheet.name.clone(),
                kind,
                rows: sheet.rows.len(),
                kept: 0,
                bad_dates: 0,
                header_rows: 0,
            },
        };

        tables.report.sheets.push(report);
    }

    tables
}

fn normalise_dated(
    sheet: &Sheet,
    kind: SheetKind,
    stamp_university: Option<&str>,
) -> (Vec<DatedRecord>, SheetReport) {
    let mut report = SheetReport {
        name: sheet.name.clone(),
        kind,
        rows: sheet.rows.len(),
        kept: 0,
        bad_dates: 0,
        header_rows: 0,
    };

    let Some(date_idx) = sheet.column_index(DATE_COLUMN) else {
        return (Vec::new(), report);
    };

    let mut out = Vec::new();

    for row in &sheet.rows {
        let raw = row.get(date_idx).unwrap_or(&CellValue::Empty);

        // header ripetuto in mezzo al foglio
        if kind == SheetKind::Timetable && raw.is_literal(DATE_COLUMN) {
            report.header_rows += 1;
            continue;
        }

        let Some(dt) = parse_cell_datetime(raw) else {
            report.bad_dates += 1;
            continue;
        };

        let mut record = Record::from_row(&sheet.columns, row);
        record.set(DATE_COLUMN, CellValue::DateTime(dt));

        if let Some(university) = stamp_university {
            record.set(DEPARTMENT_COLUMN, CellValue::text(&sheet.name));
            record.set(UNIVERSITY_COLUMN, CellValue::text(university));
        }

        out.push(DatedRecord {
            date: dt.date(),
            record,
        });
    }

    report.kept = out.len();
    (out, report)
}

fn validate_courses(sheet: &Sheet, layout: &CourseLayout) -> CourseSheet {
    let missing = layout.missing_from(&sheet.columns);
    if !missing.is_empty() {
        return CourseSheet::Invalid {
            sheet: sheet.name.clone(),
            missing: missing.into_iter().map(str::to_string).collect(),
        };
    }

    CourseSheet::Valid(
        sheet
            .rows
            .iter()
            .map(|row| Record::from_row(&sheet.columns, row))
            .collect(),
    )
}
