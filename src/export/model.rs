// src/export/model.rs

use crate::models::float::FloatRecord;
use crate::models::measurement::Measurement;
use crate::models::ocean::Ocean;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// A typed cell, so that XLSX can write numbers and dates natively.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Integer(i64),
    Timestamp(DateTime<Utc>),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    /// Plain text rendering used by CSV and PDF.
    pub fn display(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
            Cell::Integer(n) => n.to_string(),
            Cell::Timestamp(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Cell::Number(_) | Cell::Integer(_))
    }

    fn to_json(&self) -> Value {
        match self {
            Cell::Text(s) => Value::String(s.clone()),
            Cell::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Cell::Integer(n) => Value::from(*n),
            Cell::Timestamp(_) => Value::String(self.display()),
        }
    }
}

/// One NetCDF-style variable: a numeric column with units.
#[derive(Debug, Clone, Serialize)]
pub struct Variable {
    #[serde(skip)]
    pub name: &'static str,
    pub dimensions: [&'static str; 2],
    pub data: Vec<f64>,
    pub units: &'static str,
    pub long_name: &'static str,
}

impl Variable {
    fn new(
        name: &'static str,
        units: &'static str,
        long_name: &'static str,
        data: Vec<f64>,
    ) -> Self {
        Self {
            name,
            dimensions: ["time", "location"],
            data,
            units,
            long_name,
        }
    }
}

/// Flat table shared by all export writers.
#[derive(Debug, Clone)]
pub struct ExportTable {
    pub title: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
    pub variables: Vec<Variable>,
}

const OCEAN_HEADERS: &[&str] = &[
    "Name",
    "Region",
    "Temperature (°C)",
    "Salinity (PSU)",
    "Wave Height (m)",
    "Wind Speed (km/h)",
    "Trend",
    "24h Change",
    "Status",
    "Timestamp",
];

const FLOAT_HEADERS: &[&str] = &[
    "Float ID",
    "Region",
    "Latitude",
    "Longitude",
    "Status",
    "Last Profile",
    "Depth (m)",
    "Temperature (°C)",
    "Salinity (PSU)",
    "Oxygen (μmol/kg)",
    "QC Flag",
];

const MEASUREMENT_HEADERS: &[&str] = &[
    "Latitude",
    "Longitude",
    "Pressure Min (dbar)",
    "Pressure Max (dbar)",
    "Pressure Count",
    "Temperature (°C)",
];

impl ExportTable {
    /// Ocean dashboard rows; `watched` decides the Status column.
    pub fn oceans<F>(rows: &[&Ocean], watched: F, now: DateTime<Utc>) -> Self
    where
        F: Fn(&Ocean) -> bool,
    {
        let cells = rows
            .iter()
            .map(|o| {
                vec![
                    Cell::text(o.name),
                    Cell::text(o.region),
                    Cell::Number(o.temperature),
                    Cell::Number(o.salinity),
                    Cell::Number(o.wave_height),
                    Cell::Number(o.wind_speed),
                    Cell::text(o.trend.as_str()),
                    Cell::Number(o.change),
                    Cell::text(if watched(o) {
                        "Watchlisted"
                    } else {
                        "Not Watchlisted"
                    }),
                    Cell::Timestamp(now),
                ]
            })
            .collect();

        let variables = vec![
            Variable::new(
                "temperature",
                "degrees_celsius",
                "Sea Surface Temperature",
                rows.iter().map(|o| o.temperature).collect(),
            ),
            Variable::new(
                "salinity",
                "psu",
                "Sea Surface Salinity",
                rows.iter().map(|o| o.salinity).collect(),
            ),
            Variable::new(
                "wave_height",
                "meters",
                "Significant Wave Height",
                rows.iter().map(|o| o.wave_height).collect(),
            ),
            Variable::new(
                "wind_speed",
                "km/h",
                "Wind Speed",
                rows.iter().map(|o| o.wind_speed).collect(),
            ),
        ];

        Self {
            title: "Ocean conditions".to_string(),
            headers: OCEAN_HEADERS.to_vec(),
            rows: cells,
            variables,
        }
    }

    pub fn floats(rows: &[FloatRecord]) -> Self {
        let cells = rows
            .iter()
            .map(|f| {
                vec![
                    Cell::text(f.id),
                    Cell::text(f.region),
                    Cell::Number(f.latitude),
                    Cell::Number(f.longitude),
                    Cell::text(f.status.as_str()),
                    f.last_profile_at()
                        .map(Cell::Timestamp)
                        .unwrap_or_else(|| Cell::text(f.last_profile)),
                    Cell::Number(f.depth),
                    Cell::Number(f.temperature),
                    Cell::Number(f.salinity),
                    Cell::Number(f.oxygen),
                    Cell::text(f.qc_flag.as_str()),
                ]
            })
            .collect();

        let variables = vec![
            Variable::new(
                "temperature",
                "degrees_celsius",
                "Sea Water Temperature",
                rows.iter().map(|f| f.temperature).collect(),
            ),
            Variable::new(
                "salinity",
                "psu",
                "Sea Water Practical Salinity",
                rows.iter().map(|f| f.salinity).collect(),
            ),
            Variable::new(
                "oxygen",
                "micromole/kg",
                "Dissolved Oxygen",
                rows.iter().map(|f| f.oxygen).collect(),
            ),
            Variable::new(
                "depth",
                "meters",
                "Profile Depth",
                rows.iter().map(|f| f.depth).collect(),
            ),
        ];

        Self {
            title: "Argo floats".to_string(),
            headers: FLOAT_HEADERS.to_vec(),
            rows: cells,
            variables,
        }
    }

    pub fn measurements(rows: &[Measurement]) -> Self {
        let cells = rows
            .iter()
            .map(|m| {
                vec![
                    Cell::Number(m.latitude),
                    Cell::Number(m.longitude),
                    Cell::Number(m.pressure_min),
                    Cell::Number(m.pressure_max),
                    Cell::Integer(i64::from(m.pressure_count)),
                    Cell::Number(m.temperature),
                ]
            })
            .collect();

        let variables = vec![
            Variable::new(
                "temperature",
                "degrees_celsius",
                "Sea Water Temperature",
                rows.iter().map(|m| m.temperature).collect(),
            ),
            Variable::new(
                "pressure_min",
                "dbar",
                "Minimum Sampled Pressure",
                rows.iter().map(|m| m.pressure_min).collect(),
            ),
            Variable::new(
                "pressure_max",
                "dbar",
                "Maximum Sampled Pressure",
                rows.iter().map(|m| m.pressure_max).collect(),
            ),
        ];

        Self {
            title: "Caribbean measurements".to_string(),
            headers: MEASUREMENT_HEADERS.to_vec(),
            rows: cells,
            variables,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows as text (for CSV / PDF).
    pub fn string_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| r.iter().map(Cell::display).collect())
            .collect()
    }

    /// Rows as JSON objects keyed by header.
    pub fn json_records(&self) -> Vec<Value> {
        self.rows
            .iter()
            .map(|r| {
                let mut obj = Map::new();
                for (h, c) in self.headers.iter().zip(r) {
                    obj.insert(h.to_string(), c.to_json());
                }
                Value::Object(obj)
            })
            .collect()
    }
}
