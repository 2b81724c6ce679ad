// src/core/detail.rs

use crate::core::grouper::GroupedEvents;
use crate::ingest::ingestor::DEPARTMENT_COLUMN;
use crate::models::Record;
use crate::utils::date::long_date;
use chrono::NaiveDate;

const NOT_AVAILABLE: &str = "N/A";
const WRAP_WIDTH: usize = 76;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKind {
    Class,
    Special,
    NamedDay,
}

/// One formatted record of the detail panel.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailBlock {
    pub kind: DetailKind,
    pub lines: Vec<String>,
}

/// Detail Panel: every record on `date`, classes first, then special days, then named days.
pub fn detail_panel(date: &NaiveDate, grouped: &GroupedEvents) -> Vec<DetailBlock> {
    let classes = grouped.events_on(date).iter().map(class_block);
    let specials = grouped.specials_on(date).iter().map(special_block);
    let named = grouped.named_days_on(date).iter().map(named_day_block);

    classes.chain(specials).chain(named).collect()
}

fn class_block(e: &Record) -> DetailBlock {
    DetailBlock {
        kind: DetailKind::Class,
        lines: vec![
            format!("🔹 {}", e.text_or("Activity", "Unnamed activity")),
            format!("🕒 {}", e.text_or("Access time", NOT_AVAILABLE)),
            format!("👨‍🏫 {}", e.text_or("Expert Name", NOT_AVAILABLE)),
            format!(
                "🏛️ {} | {}",
                e.text_or(DEPARTMENT_COLUMN, NOT_AVAILABLE),
                e.text_or("Course", NOT_AVAILABLE)
            ),
            format!("💬 {}", e.text_or("Mode", NOT_AVAILABLE)),
            format!(
                "✅ {} {}",
                e.text_or("Status 1", NOT_AVAILABLE),
                e.text_or("Status 2", NOT_AVAILABLE)
            ),
        ],
    }
}

fn special_block(s: &Record) -> DetailBlock {
    DetailBlock {
        kind: DetailKind::Special,
        lines: vec![format!(
            "🎯 {} – {}",
            s.text_or("Event Type", "Special Event"),
            s.text_or("Event Name", "Unnamed event")
        )],
    }
}

fn named_day_block(n: &Record) -> DetailBlock {
    DetailBlock {
        kind: DetailKind::NamedDay,
        lines: vec![format!(
            "⭐ {} (Region: {})",
            n.text_or("Day Name", "Special Day"),
            n.text_or("Region", "Global")
        )],
    }
}

/// Text rendering of the panel, blocks separated by a blank line.
pub fn render_panel(date: &NaiveDate, blocks: &[DetailBlock]) -> String {
    let mut out = format!("📌 Events on {}\n", long_date(date));

    if blocks.is_empty() {
        out.push_str("No events on this day.\n");
        return out;
    }

    for block in blocks {
        out.push('\n');
        for line in &block.lines {
            out.push_str(&textwrap::fill(line, WRAP_WIDTH));
            out.push('\n');
        }
    }

    out
}
