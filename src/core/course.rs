// src/core/course.rs

use crate::config::CourseLayout;
use crate::errors::{AppError, AppResult};
use crate::models::{CourseRecord, Record};

/// First row (index, record) where `term` is a case-insensitive substring of any cell.
///
/// Only the first match is returned, in table order. A blank term matches nothing.
pub fn find_first<'a>(rows: &'a [Record], term: &str) -> Option<(usize, &'a Record)> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    rows.iter().enumerate().find(|(_, row)| {
        row.fields()
            .any(|(_, cell)| cell.to_string().to_lowercase().contains(&needle))
    })
}

/// Pull the named fields of `layout` out of a matched row.
///
/// Code and title are required; other fields fall back to "N/A".
pub fn extract(record: &Record, layout: &CourseLayout) -> AppResult<CourseRecord> {
    let required = |col: &str| {
        record
            .text(col)
            .ok_or_else(|| AppError::MissingField(col.to_string()))
    };
    let optional = |col: &str| record.text_or(col, "N/A");

    Ok(CourseRecord {
        code: required(layout.code.as_str())?,
        title: required(layout.title.as_str())?,
        credits: optional(layout.credits.as_str()),
        faculty: optional(layout.faculty.as_str()),
        department: optional(layout.department.as_str()),
        weeks: layout
            .weeks
            .iter()
            .filter_map(|w| record.text(w).map(|topic| (w.clone(), topic)))
            .collect(),
        internal_assessment: optional(layout.internal_assessment.as_str()),
        mid_semester: optional(layout.mid_semester.as_str()),
        end_semester: optional(layout.end_semester.as_str()),
    })
}

pub fn render_course(c: &CourseRecord) -> String {
    let mut out = format!("📘 {} – {}\n", c.code, c.title);
    out.push_str(&format!("   Credits    : {}\n", c.credits));
    out.push_str(&format!("   Faculty    : {}\n", c.faculty));
    out.push_str(&format!("   Department : {}\n", c.department));

    if !c.weeks.is_empty() {
        out.push_str("   Weekly plan:\n");
        for (week, topic) in &c.weeks {
            let wrapped = textwrap::fill(topic, 60);
            let mut lines = wrapped.lines();
            if let Some(first) = lines.next() {
                out.push_str(&format!("     {week:<8} {first}\n"));
            }
            for rest in lines {
                out.push_str(&format!("     {:<8} {rest}\n", ""));
            }
        }
    }

    out.push_str(&format!("   Internal assessment : {}\n", c.internal_assessment));
    out.push_str(&format!("   Mid semester exam   : {}\n", c.mid_semester));
    out.push_str(&format!("   End semester exam   : {}\n", c.end_semester));
    out
}
