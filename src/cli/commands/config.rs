use crate::cli::parser::{Cli, Commands};
use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        check,
        migrate: run_migrate,
        edit_config,
        editor,
    } = &cli.command
    else {
        return Ok(());
    };

    let path = cli.config_path();

    if !(*print_config || *check || *run_migrate || *edit_config) {
        info(format!("Configuration file: {}", path.display()));
        info("Use --print, --check, --migrate or --edit.");
        return Ok(());
    }

    if *print_config {
        println!("📄 Current configuration ({}):\n", path.display());
        println!("{}", serde_yaml::to_string(cfg)?);
    }

    if *check {
        report_fields(&path)?;
    }

    if *run_migrate {
        migrate::migrate_missing(&path)?;
    }

    if *edit_config {
        if !path.exists() {
            Config::init_at(&path)?;
        }
        let used = edit(&path, editor.as_deref())?;
        success(format!("Configuration file edited with '{used}'"));
    }

    Ok(())
}

fn report_fields(path: &Path) -> AppResult<()> {
    let missing = migrate::missing_fields(path)?;
    let unknown = migrate::unknown_fields(path)?;

    if missing.is_empty() {
        success("All configuration fields are present.");
    } else {
        warning(format!("Missing fields (defaults in use): {}", missing.join(", ")));
        info("Run `floatchat config --migrate` to write them to the file.");
    }

    if !unknown.is_empty() {
        warning(format!("Unknown fields ignored: {}", unknown.join(", ")));
    }

    Ok(())
}

/// $EDITOR, then $VISUAL, then nano (notepad on Windows).
fn system_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| if cfg!(windows) { "notepad" } else { "nano" }.to_string())
}

/// Tries `--editor` first and falls back to the system editor.
/// Returns the editor that succeeded.
fn edit(path: &Path, preferred: Option<&str>) -> AppResult<String> {
    let fallback = system_editor();
    let mut candidates: Vec<String> = preferred.map(str::to_string).into_iter().collect();
    if !candidates.contains(&fallback) {
        candidates.push(fallback);
    }

    for (i, ed) in candidates.iter().enumerate() {
        match Command::new(ed).arg(path).status() {
            Ok(status) if status.success() => return Ok(ed.clone()),
            _ => {
                if let Some(next) = candidates.get(i + 1) {
                    warning(format!("Editor '{ed}' not available, falling back to '{next}'"));
                }
            }
        }
    }

    Err(AppError::Config(format!(
        "failed to edit {} with {}",
        path.display(),
        candidates.join(" or ")
    )))
}
