//! Crate-wide error type. Commands bubble these up to `main`, which prints
//! them once and exits non-zero.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    // lookups
    #[error("Unknown ocean or sea: {0}")]
    UnknownOcean(String),

    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    // statistics
    #[error("Cannot summarize an empty dataset: {0}")]
    EmptyDataset(&'static str),

    #[error("Field '{field}' is not available for dataset '{dataset}'")]
    UnsupportedField {
        dataset: &'static str,
        field: &'static str,
    },

    // configuration
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
