use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FloatStatus {
    Active,
    Inactive,
    Warning,
}

impl FloatStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FloatStatus::Active => "active",
            FloatStatus::Inactive => "inactive",
            FloatStatus::Warning => "warning",
        }
    }
}

/// Quality-control label attached to a float's latest profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum QcFlag {
    Good,
    Questionable,
    Bad,
}

impl QcFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            QcFlag::Good => "good",
            QcFlag::Questionable => "questionable",
            QcFlag::Bad => "bad",
        }
    }

    pub fn is_good(&self) -> bool {
        matches!(self, QcFlag::Good)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FloatRecord {
    pub id: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub region: &'static str,
    pub last_profile: &'static str, // RFC 3339
    pub status: FloatStatus,
    pub depth: f64,
    pub temperature: f64,
    pub salinity: f64,
    pub oxygen: f64,
    pub qc_flag: QcFlag,
}

impl FloatRecord {
    pub fn last_profile_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(self.last_profile)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    pub fn is_active(&self) -> bool {
        self.status == FloatStatus::Active
    }
}
