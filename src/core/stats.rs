//! Summary statistics over the static datasets.
//!
//! Every dataset record implements [`Sampled`], which exposes its numeric
//! columns by [`Field`]. Nothing is cached; results are recomputed per call.

use crate::data;
use crate::errors::{AppError, AppResult};
use crate::models::float::FloatRecord;
use crate::models::measurement::Measurement;
use crate::models::ocean::Ocean;
use crate::models::profile::DepthSample;
use crate::models::region::RegionalSummary;
use crate::models::trend::TrendPoint;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Latitude,
    Longitude,
    Temperature,
    Salinity,
    Oxygen,
    Depth,
    Pressure,
    PressureMin,
    PressureMax,
    PressureCount,
    WaveHeight,
    WindSpeed,
    ProfileCount,
    FloatCount,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::Temperature => "temperature",
            Field::Salinity => "salinity",
            Field::Oxygen => "oxygen",
            Field::Depth => "depth",
            Field::Pressure => "pressure",
            Field::PressureMin => "pressure_min",
            Field::PressureMax => "pressure_max",
            Field::PressureCount => "pressure_count",
            Field::WaveHeight => "wave_height",
            Field::WindSpeed => "wind_speed",
            Field::ProfileCount => "profile_count",
            Field::FloatCount => "float_count",
        }
    }

    /// Display unit, empty for plain counts and coordinates.
    pub fn unit(&self) -> &'static str {
        match self {
            Field::Latitude | Field::Longitude => "°",
            Field::Temperature => "°C",
            Field::Salinity => "PSU",
            Field::Oxygen => "μmol/kg",
            Field::Depth | Field::WaveHeight => "m",
            Field::Pressure | Field::PressureMin | Field::PressureMax => "dbar",
            Field::WindSpeed => "km/h",
            Field::PressureCount | Field::ProfileCount | Field::FloatCount => "",
        }
    }
}

/// A record with named numeric columns.
pub trait Sampled {
    const DATASET: &'static str;

    /// `None` when the record has no such column.
    fn sample(&self, field: Field) -> Option<f64>;
}

impl Sampled for Measurement {
    const DATASET: &'static str = "measurements";

    fn sample(&self, field: Field) -> Option<f64> {
        match field {
            Field::Latitude => Some(self.latitude),
            Field::Longitude => Some(self.longitude),
            Field::PressureMin => Some(self.pressure_min),
            Field::PressureMax | Field::Pressure => Some(self.pressure_max),
            Field::PressureCount => Some(f64::from(self.pressure_count)),
            Field::Temperature => Some(self.temperature),
            _ => None,
        }
    }
}

impl Sampled for FloatRecord {
    const DATASET: &'static str = "floats";

    fn sample(&self, field: Field) -> Option<f64> {
        match field {
            Field::Latitude => Some(self.latitude),
            Field::Longitude => Some(self.longitude),
            Field::Depth => Some(self.depth),
            Field::Temperature => Some(self.temperature),
            Field::Salinity => Some(self.salinity),
            Field::Oxygen => Some(self.oxygen),
            _ => None,
        }
    }
}

impl Sampled for DepthSample {
    const DATASET: &'static str = "profile";

    fn sample(&self, field: Field) -> Option<f64> {
        match field {
            Field::Depth => Some(self.depth),
            Field::Temperature => Some(self.temperature),
            Field::Salinity => Some(self.salinity),
            Field::Oxygen => Some(self.oxygen),
            Field::Pressure => Some(self.pressure),
            _ => None,
        }
    }
}

impl Sampled for TrendPoint {
    const DATASET: &'static str = "trends";

    fn sample(&self, field: Field) -> Option<f64> {
        match field {
            Field::Temperature => Some(self.temperature),
            Field::Salinity => Some(self.salinity),
            Field::Oxygen => Some(self.oxygen),
            Field::ProfileCount => Some(f64::from(self.profile_count)),
            _ => None,
        }
    }
}

impl Sampled for RegionalSummary {
    const DATASET: &'static str = "regions";

    fn sample(&self, field: Field) -> Option<f64> {
        match field {
            Field::Temperature => Some(self.avg_temperature),
            Field::Salinity => Some(self.avg_salinity),
            Field::Oxygen => Some(self.avg_oxygen),
            Field::FloatCount => Some(f64::from(self.float_count)),
            _ => None,
        }
    }
}

impl Sampled for Ocean {
    const DATASET: &'static str = "oceans";

    fn sample(&self, field: Field) -> Option<f64> {
        match field {
            Field::Temperature => Some(self.temperature),
            Field::Salinity => Some(self.salinity),
            Field::WaveHeight => Some(self.wave_height),
            Field::WindSpeed => Some(self.wind_speed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub count: usize,
}

impl Summary {
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Min / max / arithmetic mean of `field` over `records`.
pub fn summarize<T: Sampled>(records: &[T], field: Field) -> AppResult<Summary> {
    let values = column(records, field)?;
    summarize_values(&values).ok_or(AppError::EmptyDataset(T::DATASET))
}

/// Sum of `field` over `records` (e.g. total pressure measurements).
pub fn total<T: Sampled>(records: &[T], field: Field) -> AppResult<f64> {
    Ok(column(records, field)?.iter().sum())
}

pub fn summarize_values(values: &[f64]) -> Option<Summary> {
    let (&first, rest) = values.split_first()?;

    let (min, max, sum) = rest
        .iter()
        .fold((first, first, first), |(lo, hi, acc), &v| {
            (lo.min(v), hi.max(v), acc + v)
        });

    let mean = sum / values.len() as f64;

    Some(Summary {
        min,
        max,
        // rounding may push the mean just outside [min, max]; NaN passes through
        mean: mean.max(min).min(max),
        count: values.len(),
    })
}

fn column<T: Sampled>(records: &[T], field: Field) -> AppResult<Vec<f64>> {
    let first = records.first().ok_or(AppError::EmptyDataset(T::DATASET))?;

    if first.sample(field).is_none() {
        return Err(AppError::UnsupportedField {
            dataset: T::DATASET,
            field: field.as_str(),
        });
    }

    Ok(records.iter().filter_map(|r| r.sample(field)).collect())
}

/// Static datasets addressable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dataset {
    Measurements,
    Floats,
    Profile,
    Trends,
    Regions,
    Oceans,
}

impl Dataset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::Measurements => Measurement::DATASET,
            Dataset::Floats => FloatRecord::DATASET,
            Dataset::Profile => DepthSample::DATASET,
            Dataset::Trends => TrendPoint::DATASET,
            Dataset::Regions => RegionalSummary::DATASET,
            Dataset::Oceans => Ocean::DATASET,
        }
    }

    pub fn summarize(&self, field: Field) -> AppResult<Summary> {
        match self {
            Dataset::Measurements => summarize(data::CARIBBEAN_MEASUREMENTS, field),
            Dataset::Floats => summarize(data::SAMPLE_FLOATS, field),
            Dataset::Profile => summarize(data::SAMPLE_DEPTH_PROFILE, field),
            Dataset::Trends => summarize(data::TREND_DATA, field),
            Dataset::Regions => summarize(data::REGIONAL_DATA, field),
            Dataset::Oceans => summarize(data::OCEANS, field),
        }
    }

    pub fn total(&self, field: Field) -> AppResult<f64> {
        match self {
            Dataset::Measurements => total(data::CARIBBEAN_MEASUREMENTS, field),
            Dataset::Floats => total(data::SAMPLE_FLOATS, field),
            Dataset::Profile => total(data::SAMPLE_DEPTH_PROFILE, field),
            Dataset::Trends => total(data::TREND_DATA, field),
            Dataset::Regions => total(data::REGIONAL_DATA, field),
            Dataset::Oceans => total(data::OCEANS, field),
        }
    }

    /// Geographic extent, for datasets that carry coordinates.
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Dataset::Measurements => Bounds::of(data::CARIBBEAN_MEASUREMENTS).ok(),
            Dataset::Floats => Bounds::of(data::SAMPLE_FLOATS).ok(),
            _ => None,
        }
    }
}

/// Lat/lon box of a dataset, used to place stations on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Bounds {
    pub fn of<T: Sampled>(records: &[T]) -> AppResult<Self> {
        let lat = summarize(records, Field::Latitude)?;
        let lon = summarize(records, Field::Longitude)?;

        Ok(Self {
            min_lat: lat.min,
            max_lat: lat.max,
            min_lon: lon.min,
            max_lon: lon.max,
        })
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// Percent position `(x, y)` inside the box; y grows southwards.
    /// A degenerate axis places the point in the middle.
    pub fn relative_position(&self, lat: f64, lon: f64) -> (f64, f64) {
        let lon_range = self.max_lon - self.min_lon;
        let lat_range = self.max_lat - self.min_lat;

        let x = if lon_range == 0.0 {
            50.0
        } else {
            (lon - self.min_lon) / lon_range * 100.0
        };
        let y = if lat_range == 0.0 {
            50.0
        } else {
            (self.max_lat - lat) / lat_range * 100.0
        };

        (x, y)
    }
}

/// Three-step colour scale for temperature markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureBand {
    Cool,
    Medium,
    Warm,
}

impl TemperatureBand {
    pub fn classify(value: f64, summary: &Summary) -> Self {
        let range = summary.range();
        if range == 0.0 {
            return TemperatureBand::Medium;
        }

        let normalized = (value - summary.min) / range;
        if normalized < 0.33 {
            TemperatureBand::Cool
        } else if normalized < 0.66 {
            TemperatureBand::Medium
        } else {
            TemperatureBand::Warm
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureBand::Cool => "cool",
            TemperatureBand::Medium => "medium",
            TemperatureBand::Warm => "warm",
        }
    }

    /// Hex colour used by the map legend.
    pub fn hex(&self) -> &'static str {
        match self {
            TemperatureBand::Cool => "#3b82f6",
            TemperatureBand::Medium => "#10b981",
            TemperatureBand::Warm => "#f59e0b",
        }
    }
}
