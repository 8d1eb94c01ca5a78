use super::{Config, FIELDS};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Read the config file as a raw YAML mapping.
/// A missing or empty file is an empty mapping.
fn read_mapping(path: &Path) -> AppResult<Mapping> {
    if !path.exists() {
        return Ok(Mapping::new());
    }

    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// Keys the file does not set explicitly (they fall back to defaults).
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;

    Ok(FIELDS
        .iter()
        .copied()
        .filter(|key| !map.contains_key(Value::String(key.to_string())))
        .collect())
}

/// Keys present in the file that the current version does not know.
pub fn unknown_fields(path: &Path) -> AppResult<Vec<String>> {
    let map = read_mapping(path)?;

    Ok(map
        .keys()
        .filter_map(Value::as_str)
        .filter(|k| !FIELDS.contains(k))
        .map(str::to_string)
        .collect())
}

/// Write every missing key with its default value, keeping existing ones.
/// Returns the keys that were added.
pub fn migrate_missing(path: &Path) -> AppResult<Vec<&'static str>> {
    let missing = missing_fields(path)?;
    if missing.is_empty() {
        info(format!("{} is up to date.", path.display()));
        return Ok(missing);
    }

    let mut map = read_mapping(path)?;
    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => return Err(AppError::ConfigSave),
    };

    for key in &missing {
        let k = Value::String(key.to_string());
        if let Some(v) = defaults.get(&k) {
            map.insert(k, v.clone());
        }
    }

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(map))?;
    fs::write(path, serialized).map_err(|_| AppError::ConfigSave)?;

    log::info!("config migrated: added {}", missing.join(", "));
    success(format!(
        "Configuration migrated: added {}",
        missing.join(", ")
    ));

    Ok(missing)
}
