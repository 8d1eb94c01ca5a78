use super::trend::Trend;
use serde::Serialize;

/// Per-basin summary shown on the dashboard and used by the chat narratives.
#[derive(Debug, Clone, Serialize)]
pub struct RegionalSummary {
    pub region: &'static str,
    pub float_count: u32,
    pub avg_temperature: f64,
    pub avg_salinity: f64,
    pub avg_oxygen: f64,
    pub trend: Trend,
    pub change_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionStatus {
    Normal,
    Warning,
}

impl RegionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionStatus::Normal => "normal",
            RegionStatus::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegionQuickView {
    pub region: &'static str,
    pub float_count: u32,
    pub status: RegionStatus,
    pub avg_temperature: f64,
    pub coverage: u32,
}
