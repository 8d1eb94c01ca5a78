// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::pdf::{PdfManager, TableLayout};
use crate::export::{ExportTable, notify_export_success};
use crate::ui::messages::info;
use chrono::{DateTime, Utc};
use std::io;
use std::path::Path;

/// Paginated PDF rendering of the export table.
pub(crate) fn export_pdf(
    table: &ExportTable,
    path: &Path,
    created: DateTime<Utc>,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let rows = table.string_rows();
    let numeric: Vec<bool> = match table.rows.first() {
        Some(first) => first.iter().map(|c| c.is_numeric()).collect(),
        None => Vec::new(),
    };

    let title = format!("FloatChat - {}", table.title);
    let subtitle = format!(
        "{} records, generated {}",
        table.len(),
        created.format("%Y-%m-%d %H:%M UTC")
    );

    let layout = TableLayout {
        title: &title,
        subtitle: &subtitle,
        headers: &table.headers,
        numeric: &numeric,
    };

    let mut pdf = PdfManager::new();
    pdf.write_table(&layout, &rows);

    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))?;

    notify_export_success("PDF", path);
    Ok(())
}
