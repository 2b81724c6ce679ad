mod common;
use acadcal::export::{ExportFormat, ScheduleTable, default_file_name, write_csv};
use acadcal::models::{CellValue, Record};
use common::ymd;

fn rows() -> Vec<Record> {
    vec![
        Record::new()
            .with("Date", CellValue::text("12-06-2024"))
            .with("Activity", CellValue::text("Lecture, part 1"))
            .with("Department", CellValue::text("CSE")),
        Record::new()
            .with("Date", CellValue::text("13-06-2024"))
            .with("Room", CellValue::text("B-12"))
            .with("Department", CellValue::text("ECE")),
    ]
}

#[test]
fn test_table_headers_are_union_in_first_seen_order() {
    let table = ScheduleTable::from_records(&rows());

    assert_eq!(table.headers, ["Date", "Activity", "Department", "Room"]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[0], ["12-06-2024", "Lecture, part 1", "CSE", ""]);
    assert_eq!(table.rows[1], ["13-06-2024", "", "ECE", "B-12"]);
}

#[test]
fn test_csv_keeps_every_value() {
    let table = ScheduleTable::from_records(&rows());
    let mut buf = Vec::new();

    write_csv(&table, &mut buf).unwrap();

    let mut rdr = csv::Reader::from_reader(buf.as_slice());
    let headers: Vec<String> = rdr.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, table.headers);

    let parsed: Vec<Vec<String>> = rdr
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect();
    assert_eq!(parsed, table.rows);
}

#[test]
fn test_empty_table() {
    let table = ScheduleTable::from_records(&[]);
    assert!(table.is_empty());
    assert!(table.headers.is_empty());
}

#[test]
fn test_default_file_names() {
    assert_eq!(
        default_file_name(&[ymd(2024, 6, 12)], ExportFormat::Csv).unwrap(),
        "schedule_2024-06-12.csv"
    );
    assert_eq!(
        default_file_name(
            &[ymd(2024, 6, 10), ymd(2024, 6, 11), ymd(2024, 6, 15)],
            ExportFormat::Xlsx
        )
        .unwrap(),
        "schedule_2024-06-10_to_2024-06-15.xlsx"
    );
    assert!(default_file_name(&[], ExportFormat::Json).is_err());
}
