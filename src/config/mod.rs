use crate::errors::{AppError, AppResult};
use crate::utils::path as paths;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Simulated "thinking" pause before an assistant reply.
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,
    /// Folder for exports written without an explicit `--file`.
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    /// Ocean names watchlisted when a session starts.
    #[serde(default = "default_watchlist")]
    pub watchlist: Vec<String>,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

/// Top-level keys, in file order.
pub const FIELDS: &[&str] = &[
    "response_delay_ms",
    "export_dir",
    "watchlist",
    "separator_char",
    "wrap_width",
];

fn default_response_delay_ms() -> u64 {
    1500
}
fn default_export_dir() -> String {
    paths::default_export_dir().to_string_lossy().to_string()
}
fn default_watchlist() -> Vec<String> {
    [
        "Indian Ocean",
        "Arabian Sea",
        "Bay of Bengal",
        "Caribbean Sea",
        "Bering Sea",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_wrap_width() -> usize {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            response_delay_ms: default_response_delay_ms(),
            export_dir: default_export_dir(),
            watchlist: default_watchlist(),
            separator_char: default_separator_char(),
            wrap_width: default_wrap_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("floatchat")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".floatchat")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("floatchat.conf")
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Write a default config file unless one already exists.
    /// Returns `true` when the file was created.
    pub fn init_at(path: &Path) -> AppResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }

    fn validate(&self) -> AppResult<()> {
        if self.separator_char.chars().count() != 1 {
            return Err(AppError::Config(format!(
                "separator_char must be a single character, got '{}'",
                self.separator_char
            )));
        }
        if self.wrap_width < 20 {
            return Err(AppError::Config(format!(
                "wrap_width must be at least 20, got {}",
                self.wrap_width
            )));
        }
        Ok(())
    }

    /// Export folder with `~` expanded.
    pub fn export_path(&self) -> PathBuf {
        paths::expand_tilde(&self.export_dir)
    }

    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }
}
