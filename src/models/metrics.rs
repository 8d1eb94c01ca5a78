use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardMetrics {
    pub active_floats: u32,
    pub new_profiles: u32,
    pub data_quality: f64,
    pub last_update: &'static str,
    pub total_profiles: u64,
    pub global_coverage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemStatus {
    Operational,
    Warning,
    Critical,
}

impl SystemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemStatus::Operational => "operational",
            SystemStatus::Warning => "warning",
            SystemStatus::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    pub id: &'static str,
    pub kind: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub timestamp: &'static str,
    pub location: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryCategory {
    Temperature,
    Salinity,
    Oxygen,
    Location,
    Trends,
}

impl QueryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryCategory::Temperature => "temperature",
            QueryCategory::Salinity => "salinity",
            QueryCategory::Oxygen => "oxygen",
            QueryCategory::Location => "location",
            QueryCategory::Trends => "trends",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestedQuery {
    pub id: &'static str,
    pub category: QueryCategory,
    pub question: &'static str,
    pub description: &'static str,
}
