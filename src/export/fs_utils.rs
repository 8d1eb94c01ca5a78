// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::ui::messages::{info, warning};
use chrono::NaiveDate;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Output path for an export.
///
/// - explicit `file` → must be absolute
/// - no `file` → `<export_dir>/ocean-data-YYYY-MM-DD.<ext>`
pub(crate) fn resolve_output_path(
    file: Option<&str>,
    export_dir: &Path,
    format: ExportFormat,
    date: NaiveDate,
) -> AppResult<PathBuf> {
    match file {
        Some(f) => absolute_path(f),
        None => Ok(export_dir.join(default_file_name(format, date))),
    }
}

/// Rejects relative output paths.
pub(crate) fn absolute_path(file: &str) -> AppResult<PathBuf> {
    let path = PathBuf::from(file);
    if !path.is_absolute() {
        return Err(AppError::Export(format!(
            "Output file path must be absolute: {file}"
        )));
    }
    Ok(path)
}

pub fn default_file_name(format: ExportFormat, date: NaiveDate) -> String {
    format!(
        "ocean-data-{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Checks that `path` can be created or overwritten.
///
/// - missing file → parent directory is created if needed
/// - existing file with `force` → Ok
/// - existing file without `force` → asks for confirmation on `input`
pub(crate) fn ensure_writable<R: BufRead>(
    path: &Path,
    force: bool,
    input: &mut R,
) -> AppResult<()> {
    if !path.exists() {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            fs::create_dir_all(dir)?;
        }
        return Ok(());
    }

    if force {
        log::debug!("overwriting {} (--force)", path.display());
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "Export cancelled: existing file not overwritten".to_string(),
        ))
    }
}
