mod common;
use acadcal::core::schedule::{flatten, get_week_dates, resolve, resolve_day};
use acadcal::ingest::Workbook;
use acadcal::ingest::dates::{parse_cell_datetime, parse_schedule_date};
use acadcal::models::{CellValue, DateMode};
use chrono::{Datelike, Weekday};
use common::{fixture_bytes, sheet, text_row, workbook, ymd};

#[test]
fn test_week_dates_monday_to_saturday() {
    let week = get_week_dates(ymd(2024, 6, 12));

    assert_eq!(
        week,
        vec![
            ymd(2024, 6, 10),
            ymd(2024, 6, 11),
            ymd(2024, 6, 12),
            ymd(2024, 6, 13),
            ymd(2024, 6, 14),
            ymd(2024, 6, 15),
        ]
    );
    assert!(week.iter().all(|d| d.weekday() != Weekday::Sun));
}

#[test]
fn test_week_dates_from_sunday_and_monday() {
    assert_eq!(get_week_dates(ymd(2024, 6, 16))[0], ymd(2024, 6, 10));
    assert_eq!(get_week_dates(ymd(2024, 6, 10))[0], ymd(2024, 6, 10));
    // across a month boundary
    assert_eq!(get_week_dates(ymd(2024, 7, 3))[0], ymd(2024, 7, 1));
    assert_eq!(get_week_dates(ymd(2024, 5, 1))[0], ymd(2024, 4, 29));
}

#[test]
fn test_schedule_date_formats() {
    let dt = ymd(2024, 6, 12).and_hms_opt(0, 0, 0).unwrap();

    assert_eq!(parse_schedule_date(&CellValue::DateTime(dt)), Some(ymd(2024, 6, 12)));
    assert_eq!(parse_schedule_date(&CellValue::text("2024-06-12 00:00:00")), Some(ymd(2024, 6, 12)));
    assert_eq!(parse_schedule_date(&CellValue::text("12-06-2024")), Some(ymd(2024, 6, 12)));
    assert_eq!(
        parse_schedule_date(&CellValue::text("12-06-2024 - Wednesday")),
        Some(ymd(2024, 6, 12))
    );
    assert_eq!(parse_schedule_date(&CellValue::text("2024-06-12")), None);
    assert_eq!(parse_schedule_date(&CellValue::text("Date")), None);
    assert_eq!(parse_schedule_date(&CellValue::Empty), None);
}

#[test]
fn test_ingest_date_parsing_never_fails() {
    for raw in ["", "Date", "tbd", "31-02-2024", "2024-13-01"] {
        assert_eq!(parse_cell_datetime(&CellValue::text(raw)), None, "{raw}");
    }
    assert_eq!(parse_cell_datetime(&CellValue::Number(45455.0)), None);
    assert_eq!(parse_cell_datetime(&CellValue::Bool(true)), None);
    assert_eq!(
        parse_cell_datetime(&CellValue::text("June 12, 2024")).map(|d| d.date()),
        Some(ymd(2024, 6, 12))
    );
}

#[test]
fn test_resolve_day_stamps_rows() {
    let wb = Workbook::from_bytes(&fixture_bytes()).expect("fixture opens");

    let day = resolve_day(&wb, ymd(2024, 6, 12), "Tech University");

    let activities: Vec<String> = day.rows.iter().map(|r| r.text_or("Activity", "")).collect();
    assert_eq!(activities, ["Algorithms Lecture", "Algorithms Lab", "Circuits"]);

    let first = &day.rows[0];
    assert_eq!(first.text("Department").as_deref(), Some("CSE"));
    assert_eq!(first.text("Day").as_deref(), Some("Wednesday"));
    assert_eq!(first.text("University").as_deref(), Some("Tech University"));
    assert_eq!(
        first.text("Display Date").as_deref(),
        Some("Wednesday, 12 June 2024")
    );
    assert_eq!(day.rows[2].text("Department").as_deref(), Some("ECE"));
}

#[test]
fn test_resolve_week_in_query_order() {
    let wb = Workbook::from_bytes(&fixture_bytes()).expect("fixture opens");
    let dates = get_week_dates(ymd(2024, 6, 12));

    let days = resolve(&wb, &dates, "Tech University");

    assert_eq!(days.len(), 6);
    let counts: Vec<usize> = days.iter().map(|d| d.rows.len()).collect();
    assert_eq!(counts, [0, 0, 3, 1, 1, 0]);

    let all = flatten(&days);
    let activities: Vec<String> = all.iter().map(|r| r.text_or("Activity", "")).collect();
    assert_eq!(
        activities,
        ["Algorithms Lecture", "Algorithms Lab", "Circuits", "Databases", "Signals"]
    );
}

#[test]
fn test_unparseable_cells_stay_but_never_match() {
    let wb = workbook(vec![sheet(
        "CSE",
        &["Date", "Activity"],
        vec![
            text_row(&["garbage", "Nothing"]),
            text_row(&["03-09-2024", "Lecture"]),
        ],
    )]);

    assert_eq!(wb.sheets[0].rows.len(), 2);
    let day = resolve_day(&wb, ymd(2024, 9, 3), "Tech University");
    assert_eq!(day.rows.len(), 1);
    assert!(resolve_day(&wb, ymd(2024, 9, 4), "Tech University").rows.is_empty());
}

#[test]
fn test_date_modes() {
    let today = ymd(2024, 6, 12);

    assert_eq!(DateMode::Today.target_dates(today, None).unwrap(), [today]);
    assert_eq!(DateMode::Tomorrow.target_dates(today, None).unwrap(), [ymd(2024, 6, 13)]);
    assert_eq!(
        DateMode::Custom.target_dates(today, Some(ymd(2024, 1, 2))).unwrap(),
        [ymd(2024, 1, 2)]
    );
    assert!(DateMode::Custom.target_dates(today, None).is_err());
    assert_eq!(DateMode::ThisWeek.target_dates(today, None).unwrap().len(), 6);
    assert_eq!(
        DateMode::ThisWeek.target_dates(today, Some(ymd(2024, 7, 3))).unwrap()[0],
        ymd(2024, 7, 1)
    );
}
