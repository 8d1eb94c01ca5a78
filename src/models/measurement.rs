use serde::Serialize;

/// One CTD station of the Caribbean sample section.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Measurement {
    pub latitude: f64,
    pub longitude: f64,
    pub pressure_min: f64,
    pub pressure_max: f64,
    pub pressure_count: u32,
    pub temperature: f64,
}
