use super::trend::Trend;
use serde::Serialize;

/// A row of the ocean dashboard (one ocean or marginal sea).
#[derive(Debug, Clone, Serialize)]
pub struct Ocean {
    pub id: &'static str,
    pub name: &'static str,
    pub region: &'static str,
    pub temperature: f64,
    pub salinity: f64,
    pub wave_height: f64,
    pub wind_speed: f64,
    pub trend: Trend,
    /// 24h change in °C.
    pub change: f64,
    pub watchlisted: bool,
    #[serde(skip)]
    pub details: Option<&'static OceanDetails>,
}

/// Long-form information shown on an ocean card.
#[derive(Debug, Serialize)]
pub struct OceanDetails {
    pub general_info: &'static str,
    pub depth: f64,
    pub monthly: &'static [MonthlyPoint],
    pub marine_life: Option<MarineLife>,
    pub climate: Option<ClimatePattern>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MonthlyPoint {
    pub month: &'static str,
    pub temperature: f64,
    pub salinity: f64,
    pub wave_height: Option<f64>,
    pub wind_speed: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MarineLife {
    pub species: &'static [&'static str],
    pub biodiversity_index: f64,
    pub protected_areas: u32,
    pub coral_reefs: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ClimatePattern {
    pub monsoons: &'static str,
    pub elnino: &'static str,
    pub currents: &'static str,
}

/// Pairwise differences `second - first`.
#[derive(Debug, Clone, Serialize)]
pub struct OceanComparison {
    pub first: &'static str,
    pub second: &'static str,
    pub temperature: f64,
    pub salinity: f64,
    pub wave_height: f64,
    pub wind_speed: f64,
}
