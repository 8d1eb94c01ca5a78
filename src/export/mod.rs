// src/export/mod.rs

mod excel_date;
mod fs_utils;
mod json_csv;
pub mod logic;
pub mod model;
mod netcdf;
mod pdf;
mod pdf_export;
mod xlsx;

pub use logic::{ExportLogic, ExportRequest};
pub use model::{Cell, ExportTable};
pub use netcdf::NetcdfDocument;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every writer.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    /// NetCDF-style JSON document (`.nc.json`)
    Netcdf,
    Json,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Netcdf => "netcdf",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Netcdf => "nc.json",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportDataset {
    #[default]
    Oceans,
    Floats,
    Measurements,
}

impl ExportDataset {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportDataset::Oceans => "oceans",
            ExportDataset::Floats => "floats",
            ExportDataset::Measurements => "measurements",
        }
    }
}
