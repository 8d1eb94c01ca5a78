// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{ExportTable, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Export JSON pretty-printed: one object per row, keyed by header.
pub(crate) fn export_json(table: &ExportTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&table.json_records())
        .map_err(|e| AppError::from(io::Error::other(format!("JSON serialization error: {e}"))))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV: header row, then one line per record.
pub(crate) fn export_csv(table: &ExportTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let file = File::create(path)?;
    write_csv(table, file)?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Writes the table as CSV to any writer (file or stdout).
pub fn write_csv<W: Write>(table: &ExportTable, out: W) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(&table.headers)?;
    for row in table.string_rows() {
        wtr.write_record(&row)?;
    }

    wtr.flush()
        .map_err(|e| AppError::from(io::Error::other(format!("CSV flush error: {e}"))))?;

    Ok(())
}
