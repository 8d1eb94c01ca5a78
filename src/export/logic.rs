// src/export/logic.rs

use crate::config::Config;
use crate::core::briefing;
use crate::core::state::AppState;
use crate::data::{CARIBBEAN_MEASUREMENTS, OCEANS, SAMPLE_FLOATS};
use crate::errors::AppResult;
use crate::export::fs_utils::{absolute_path, ensure_writable, resolve_output_path};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::netcdf::export_netcdf;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportDataset, ExportFormat, ExportTable, notify_export_success};
use crate::models::chat::ChatMessage;
use crate::models::float::FloatRecord;
use crate::ui::messages::{info, warning};
use chrono::{DateTime, Utc};
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

/// What to export and where.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub dataset: ExportDataset,
    /// Absolute output path; `None` writes into the configured export folder.
    pub file: Option<String>,
    pub search: Option<String>,
    pub watchlist_only: bool,
    pub force: bool,
}

/// High-level export entry points.
pub struct ExportLogic;

impl ExportLogic {
    /// Exports the requested dataset. Returns the written path, or `None` when
    /// the filters leave nothing to export.
    pub fn export(req: &ExportRequest, cfg: &Config) -> AppResult<Option<PathBuf>> {
        let stdin = io::stdin();
        Self::export_with_input(req, cfg, &mut stdin.lock())
    }

    /// Same as [`ExportLogic::export`], reading the overwrite answer from `input`.
    pub fn export_with_input<R: BufRead>(
        req: &ExportRequest,
        cfg: &Config,
        input: &mut R,
    ) -> AppResult<Option<PathBuf>> {
        let now = Utc::now();
        let path = resolve_output_path(
            req.file.as_deref(),
            &cfg.export_path(),
            req.format,
            now.date_naive(),
        )?;

        let state = AppState::from_names(&cfg.watchlist);
        let table = Self::build_table(req, &state, now);

        if table.is_empty() {
            warning("No records match the selected filters.");
            return Ok(None);
        }

        ensure_writable(&path, req.force, input)?;

        log::info!(
            "exporting {} {} rows as {} to {}",
            table.len(),
            req.dataset.as_str(),
            req.format.as_str(),
            path.display()
        );

        Self::write(&table, req.format, &path, now)?;
        Ok(Some(path))
    }

    /// Applies the filters and flattens the dataset.
    pub fn build_table(req: &ExportRequest, state: &AppState, now: DateTime<Utc>) -> ExportTable {
        let term = req.search.as_deref().unwrap_or("");

        match req.dataset {
            ExportDataset::Oceans => {
                let rows: Vec<_> = briefing::search(OCEANS, term)
                    .into_iter()
                    .filter(|o| !req.watchlist_only || state.is_watched(o))
                    .collect();
                ExportTable::oceans(&rows, |o| state.is_watched(o), now)
            }
            ExportDataset::Floats => {
                if req.watchlist_only {
                    warning("--watchlist applies to oceans only; ignored.");
                }
                let rows: Vec<FloatRecord> = SAMPLE_FLOATS
                    .iter()
                    .filter(|f| matches_float(f, term))
                    .cloned()
                    .collect();
                ExportTable::floats(&rows)
            }
            ExportDataset::Measurements => {
                if req.watchlist_only || !term.is_empty() {
                    warning("Filters apply to oceans and floats only; ignored.");
                }
                ExportTable::measurements(CARIBBEAN_MEASUREMENTS)
            }
        }
    }

    pub fn write(
        table: &ExportTable,
        format: ExportFormat,
        path: &Path,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        match format {
            ExportFormat::Csv => export_csv(table, path),
            ExportFormat::Netcdf => export_netcdf(table, path, now),
            ExportFormat::Json => export_json(table, path),
            ExportFormat::Xlsx => export_xlsx(table, path),
            ExportFormat::Pdf => export_pdf(table, path, now),
        }
    }

    /// Chat transcript as pretty JSON.
    pub fn export_transcript<R: BufRead>(
        messages: &[ChatMessage],
        file: &str,
        force: bool,
        input: &mut R,
    ) -> AppResult<PathBuf> {
        let path = absolute_path(file)?;
        ensure_writable(&path, force, input)?;

        info(format!("Exporting chat transcript: {}", path.display()));
        let json = serde_json::to_string_pretty(messages)?;
        std::fs::write(&path, json)?;

        notify_export_success("Transcript", &path);
        Ok(path)
    }
}

fn matches_float(f: &FloatRecord, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    term.is_empty() || f.id.contains(&term) || f.region.to_lowercase().contains(&term)
}
