use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Stable => "→",
        }
    }
}

/// One point of the global 30-day trend series.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrendPoint {
    pub date: &'static str,
    pub temperature: f64,
    pub salinity: f64,
    pub oxygen: f64,
    pub profile_count: u32,
}
