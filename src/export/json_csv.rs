// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{ScheduleTable, notify_export_success};
use crate::ui::messages::info;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Export JSON pretty-printed: one object per row, keys in column order.
pub(crate) fn export_json(table: &ScheduleTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let objects: Vec<Value> = table
        .rows
        .iter()
        .map(|row| {
            let obj: Map<String, Value> = table
                .headers
                .iter()
                .zip(row)
                .map(|(h, v)| (h.clone(), Value::String(v.clone())))
                .collect();
            Value::Object(obj)
        })
        .collect();

    let json_data = serde_json::to_string_pretty(&objects)
        .map_err(|e| AppError::from(io::Error::other(format!("JSON serialization error: {e}"))))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV (UTF-8, header row first).
pub(crate) fn export_csv(table: &ScheduleTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let file = File::create(path)?;
    write_csv(table, file)?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Write `table` as CSV to any writer.
pub fn write_csv<W: Write>(table: &ScheduleTable, writer: W) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(&table.headers)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for row in &table.rows {
        wtr.write_record(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    Ok(())
}
