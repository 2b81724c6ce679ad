// src/export/model.rs

use crate::models::Record;

/// Flat text table of resolved schedule rows, shared by the terminal view and
/// every export format.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScheduleTable {
    /// Union of the row columns in first-seen order
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ScheduleTable {
    pub fn from_records(records: &[Record]) -> Self {
        let mut headers: Vec<String> = Vec::new();
        for r in records {
            for c in r.columns() {
                if !headers.iter().any(|h| h == c) {
                    headers.push(c.to_string());
                }
            }
        }

        let rows = records
            .iter()
            .map(|r| {
                headers
                    .iter()
                    .map(|h| r.get(h).map(|v| v.to_string()).unwrap_or_default())
                    .collect()
            })
            .collect();

        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
