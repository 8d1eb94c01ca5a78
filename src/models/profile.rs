use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DepthSample {
    pub depth: f64,
    pub temperature: f64,
    pub salinity: f64,
    pub oxygen: f64,
    pub pressure: f64,
}
