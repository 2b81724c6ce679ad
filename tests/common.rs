#![allow(dead_code)]
use acadcal::config::CourseLayout;
use acadcal::ingest::{Sheet, Workbook};
use acadcal::models::CellValue;
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rust_xlsxwriter::Format;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn acal() -> Command {
    cargo_bin_cmd!("acadcal")
}

/// Temp file path for a test; any leftover from a previous run is removed
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("acadcal_{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// acadcal invocation with a private (non-existent) config file, so the
/// user's real configuration never leaks into a test
pub fn acal_isolated(name: &str) -> Command {
    let cfg = temp_path(&format!("{name}_cfg"), "conf");
    let mut cmd = acal();
    cmd.args(["--config", &cfg]);
    cmd
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Cell written into a fixture workbook
pub enum Fx<'a> {
    T(&'a str),
    /// Date-formatted numeric cell, as spreadsheet apps store dates
    D(i32, u32, u32),
    /// Time-only numeric cell (`hh:mm`), a fraction of a day
    Tm(u32, u32),
}

pub const TIMETABLE_COLUMNS: [&str; 8] = [
    "Date",
    "Activity",
    "Access time",
    "Expert Name",
    "Course",
    "Mode",
    "Status 1",
    "Status 2",
];

fn excel_serial(y: i32, m: u32, d: u32) -> f64 {
    (ymd(y, m, d) - ymd(1899, 12, 30)).num_days() as f64
}

fn add_sheet(wb: &mut rust_xlsxwriter::Workbook, name: &str, header: &[&str], rows: &[Vec<Fx>]) {
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let time_format = Format::new().set_num_format("hh:mm");
    let ws = wb.add_worksheet();
    ws.set_name(name).expect("sheet name");

    for (c, h) in header.iter().enumerate() {
        ws.write_string(0, c as u16, *h).expect("write header");
    }

    for (r, row) in rows.iter().enumerate() {
        let r = (r + 1) as u32;
        for (c, cell) in row.iter().enumerate() {
            let c = c as u16;
            match cell {
                Fx::T("") => {}
                Fx::T(s) => {
                    ws.write_string(r, c, *s).expect("write text");
                }
                Fx::D(y, m, d) => {
                    ws.write_number_with_format(r, c, excel_serial(*y, *m, *d), &date_format)
                        .expect("write date");
                }
                Fx::Tm(h, m) => {
                    let fraction = (*h as f64 * 60.0 + *m as f64) / 1440.0;
                    ws.write_number_with_format(r, c, fraction, &time_format)
                        .expect("write time");
                }
            }
        }
    }
}

fn timetable_row<'a>(date: Fx<'a>, activity: &'a str, time: Fx<'a>, expert: &'a str, course: &'a str) -> Vec<Fx<'a>> {
    vec![
        date,
        Fx::T(activity),
        time,
        Fx::T(expert),
        Fx::T(course),
        Fx::T("Offline"),
        Fx::T("Confirmed"),
        Fx::T(""),
    ]
}

fn course_header() -> Vec<String> {
    CourseLayout::default()
        .required_columns()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn course_row<'a>(code: &'a str, title: &'a str, week1: &'a str, faculty: &'a str) -> Vec<Fx<'a>> {
    let mut row = vec![
        Fx::T(code),
        Fx::T(title),
        Fx::T("4"),
        Fx::T(faculty),
        Fx::T("CSE"),
        Fx::T(week1),
    ];
    for _ in 2..=15 {
        row.push(Fx::T(""));
    }
    row.push(Fx::T("Quiz 20%"));
    row.push(Fx::T("10-07-2024"));
    row.push(Fx::T("20-11-2024"));
    row
}

/// The reference workbook used by most tests (June 2024, 12th is a Wednesday):
///
/// - `CSE`: classes on 12th (x2, date cells; the first has a time-formatted
///   access time), 13th (text "13-06-2024"),
///   one repeated header row and one unreadable date
/// - `ECE`: classes on 14th and 12th
/// - `special_days`: workshop on 12th, orientation on 20th, sports day on 21st
/// - `important_days`: Founders Day on 15th, no region
/// - `course details`: CS201, CS301, and a row without course code
/// - `Notes`: no Date column, ignored
pub fn build_fixture_workbook() -> rust_xlsxwriter::Workbook {
    let mut wb = rust_xlsxwriter::Workbook::new();

    add_sheet(
        &mut wb,
        "CSE",
        &TIMETABLE_COLUMNS,
        &[
            timetable_row(Fx::D(2024, 6, 12), "Algorithms Lecture", Fx::Tm(9, 0), "Dr. Rao", "CS201"),
            TIMETABLE_COLUMNS.iter().map(|c| Fx::T(*c)).collect(),
            timetable_row(Fx::T("not a date"), "Ghost class", Fx::T("10:00"), "Nobody", "XX000"),
            timetable_row(Fx::D(2024, 6, 12), "Algorithms Lab", Fx::T("11:00"), "Ms. Iyer", "CS201"),
            timetable_row(Fx::T("13-06-2024"), "Databases", Fx::T("14:00"), "Dr. Shah", "CS220"),
        ],
    );

    add_sheet(
        &mut wb,
        "ECE",
        &TIMETABLE_COLUMNS,
        &[
            timetable_row(Fx::D(2024, 6, 14), "Signals", Fx::T("10:00"), "Dr. Bose", "EC210"),
            timetable_row(Fx::D(2024, 6, 12), "Circuits", Fx::T("15:00"), "Dr. Nair", "EC101"),
        ],
    );

    add_sheet(
        &mut wb,
        "special_days",
        &["Date", "Event Type", "Event Name"],
        &[
            vec![Fx::T("2024-06-12"), Fx::T("Workshop Series"), Fx::T("Rust for Beginners")],
            vec![Fx::T("2024-06-20"), Fx::T("Orientation"), Fx::T("Freshers Welcome")],
            vec![Fx::T("2024-06-21"), Fx::T("Sports Day"), Fx::T("Annual Meet")],
        ],
    );

    add_sheet(
        &mut wb,
        "important_days",
        &["Date", "Day Name", "Region"],
        &[vec![Fx::T("2024-06-15"), Fx::T("Founders Day"), Fx::T("")]],
    );

    let header = course_header();
    let header_refs: Vec<&str> = header.iter().map(String::as_str).collect();
    add_sheet(
        &mut wb,
        "course details",
        &header_refs,
        &[
            course_row("CS201", "Design of Algorithms", "Asymptotic analysis", "Dr. Rao"),
            course_row("CS301", "Advanced Algorithms", "Network flows", "Dr. Menon"),
            course_row("", "Orphan Topics", "Misc", "Dr. Who"),
        ],
    );

    add_sheet(&mut wb, "Notes", &["Note"], &[vec![Fx::T("remember to update")]]);

    wb
}

pub fn fixture_bytes() -> Vec<u8> {
    build_fixture_workbook()
        .save_to_buffer()
        .expect("save fixture to buffer")
}

/// Write the reference workbook to a temp .xlsx and return its path
pub fn write_fixture(name: &str) -> String {
    let path = temp_path(name, "xlsx");
    build_fixture_workbook().save(&path).expect("save fixture");
    path
}

/// Workbook with a course sheet that does not follow the named-column layout
pub fn write_bad_course_fixture(name: &str) -> String {
    let path = temp_path(name, "xlsx");
    let mut wb = rust_xlsxwriter::Workbook::new();
    add_sheet(
        &mut wb,
        "Course Details",
        &["S.No", "Code", "Name"],
        &[vec![Fx::T("1"), Fx::T("CS201"), Fx::T("Algorithms")]],
    );
    wb.save(&path).expect("save fixture");
    path
}

// ---------------------------
// In-memory workbooks
// ---------------------------

pub fn text_row(cells: &[&str]) -> Vec<CellValue> {
    cells
        .iter()
        .map(|c| {
            if c.is_empty() {
                CellValue::Empty
            } else {
                CellValue::text(c)
            }
        })
        .collect()
}

pub fn sheet(name: &str, columns: &[&str], rows: Vec<Vec<CellValue>>) -> Sheet {
    Sheet::new(name, columns.iter().map(|c| c.to_string()).collect(), rows)
}

pub fn workbook(sheets: Vec<Sheet>) -> Workbook {
    Workbook::new(sheets)
}
