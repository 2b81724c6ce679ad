// src/core/grouper.rs

use crate::ingest::IngestedTables;
use crate::models::{DatedRecord, Record};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Records of one category by calendar date, in sheet-then-row order.
pub type DateIndex = BTreeMap<NaiveDate, Vec<Record>>;

/// Event Grouper output: one date index per event category.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupedEvents {
    pub events: DateIndex,
    pub specials: DateIndex,
    pub named_days: DateIndex,
}

impl GroupedEvents {
    pub fn events_on(&self, date: &NaiveDate) -> &[Record] {
        slice_on(&self.events, date)
    }

    pub fn specials_on(&self, date: &NaiveDate) -> &[Record] {
        slice_on(&self.specials, date)
    }

    pub fn named_days_on(&self, date: &NaiveDate) -> &[Record] {
        slice_on(&self.named_days, date)
    }
}

fn slice_on<'a>(index: &'a DateIndex, date: &NaiveDate) -> &'a [Record] {
    index.get(date).map(Vec::as_slice).unwrap_or(&[])
}

/// Build the per-category date indexes from the ingested tables.
pub fn group(tables: &IngestedTables) -> GroupedEvents {
    GroupedEvents {
        events: index_by_date(&tables.timetable),
        specials: index_by_date(&tables.special_days),
        named_days: index_by_date(&tables.important_days),
    }
}

fn index_by_date(rows: &[DatedRecord]) -> DateIndex {
    let mut index = DateIndex::new();
    for row in rows {
        index.entry(row.date).or_default().push(row.record.clone());
    }
    index
}
