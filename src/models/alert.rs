use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }

    /// Warnings and critical alerts count as "active" on the dashboard.
    pub fn is_active(&self) -> bool {
        matches!(self, Severity::Warning | Severity::Critical)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    pub id: &'static str,
    pub severity: Severity,
    pub title: &'static str,
    pub message: &'static str,
    pub timestamp: &'static str,
    pub region: Option<&'static str>,
    pub float_id: Option<&'static str>,
}

impl Alert {
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(self.timestamp)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
