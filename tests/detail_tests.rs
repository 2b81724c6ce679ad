mod common;
use acadcal::config::CourseLayout;
use acadcal::core::detail::{DetailKind, detail_panel, render_panel};
use acadcal::core::group;
use acadcal::ingest::{Workbook, ingest};
use common::{fixture_bytes, sheet, text_row, workbook, ymd};

#[test]
fn test_panel_order_classes_then_specials_then_named_days() {
    let wb = workbook(vec![
        sheet(
            "important_days",
            &["Date", "Day Name", "Region"],
            vec![text_row(&["2024-06-12", "Founders Day", "Local"])],
        ),
        sheet(
            "special_days",
            &["Date", "Event Type", "Event Name"],
            vec![text_row(&["2024-06-12", "Seminar", "AI Ethics"])],
        ),
        sheet(
            "CSE",
            &["Date", "Activity"],
            vec![text_row(&["2024-06-12", "Compilers"])],
        ),
    ]);
    let grouped = group(&ingest(&wb, "Tech University", &CourseLayout::default()));

    let blocks = detail_panel(&ymd(2024, 6, 12), &grouped);
    let kinds: Vec<DetailKind> = blocks.iter().map(|b| b.kind).collect();

    assert_eq!(kinds, [DetailKind::Class, DetailKind::Special, DetailKind::NamedDay]);
    assert_eq!(blocks[1].lines, ["🎯 Seminar – AI Ethics"]);
    assert_eq!(blocks[2].lines, ["⭐ Founders Day (Region: Local)"]);
}

#[test]
fn test_missing_fields_use_placeholders() {
    let wb = workbook(vec![
        sheet("CSE", &["Date", "Activity"], vec![text_row(&["2024-06-12", "   "])]),
        sheet(
            "special_days",
            &["Date", "Event Name"],
            vec![text_row(&["2024-06-12", ""])],
        ),
        sheet(
            "important_days",
            &["Date", "Day Name", "Region"],
            vec![text_row(&["2024-06-12", "", ""])],
        ),
    ]);
    let grouped = group(&ingest(&wb, "Tech University", &CourseLayout::default()));

    let blocks = detail_panel(&ymd(2024, 6, 12), &grouped);

    assert_eq!(blocks[0].lines[0], "🔹 Unnamed activity");
    assert_eq!(blocks[0].lines[1], "🕒 N/A");
    assert_eq!(blocks[0].lines[3], "🏛️ CSE | N/A");
    assert_eq!(blocks[0].lines[5], "✅ N/A N/A");
    assert_eq!(blocks[1].lines, ["🎯 Special Event – Unnamed event"]);
    assert_eq!(blocks[2].lines, ["⭐ Special Day (Region: Global)"]);
}

#[test]
fn test_fixture_panel_for_wednesday() {
    let wb = Workbook::from_bytes(&fixture_bytes()).expect("fixture opens");
    let grouped = group(&ingest(&wb, "Tech University", &CourseLayout::default()));
    let date = ymd(2024, 6, 12);

    let text = render_panel(&date, &detail_panel(&date, &grouped));

    assert!(text.starts_with("📌 Events on Wednesday, 12 June 2024"));
    let lecture = text.find("Algorithms Lecture").expect("lecture shown");
    let lab = text.find("Algorithms Lab").expect("lab shown");
    let circuits = text.find("Circuits").expect("circuits shown");
    let workshop = text.find("Workshop Series – Rust for Beginners").expect("workshop shown");
    assert!(lecture < lab && lab < circuits && circuits < workshop);
    assert!(text.contains("👨‍🏫 Dr. Rao"));
    assert!(text.contains("🏛️ CSE | CS201"));
}

#[test]
fn test_empty_day_panel() {
    let date = ymd(2024, 6, 1);
    let text = render_panel(&date, &detail_panel(&date, &Default::default()));

    assert!(text.contains("Saturday, 01 June 2024"));
    assert!(text.contains("No events on this day."));
}

#[test]
fn test_time_formatted_access_time_is_shown_as_time() {
    let wb = Workbook::from_bytes(&fixture_bytes()).expect("fixture opens");
    let grouped = group(&ingest(&wb, "Tech University", &CourseLayout::default()));

    let blocks = detail_panel(&ymd(2024, 6, 12), &grouped);

    assert_eq!(blocks[0].lines[0], "🔹 Algorithms Lecture");
    assert_eq!(blocks[0].lines[1], "🕒 09:00:00");
    // plain text times are left alone
    assert_eq!(blocks[1].lines[1], "🕒 11:00");
}
