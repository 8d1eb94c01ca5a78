// src/export/netcdf.rs

use crate::errors::AppResult;
use crate::export::model::{ExportTable, Variable};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// JSON rendition of a NetCDF file: dimensions, variables, global attributes.
#[derive(Debug, Serialize)]
pub struct NetcdfDocument {
    pub dimensions: Dimensions,
    pub variables: Map<String, Value>,
    pub global_attributes: GlobalAttributes,
}

#[derive(Debug, Serialize)]
pub struct Dimensions {
    pub time: usize,
    pub location: usize,
}

#[derive(Debug, Serialize)]
pub struct GlobalAttributes {
    pub title: &'static str,
    pub institution: &'static str,
    pub source: &'static str,
    pub created: String,
}

impl NetcdfDocument {
    pub fn from_table(table: &ExportTable, created: DateTime<Utc>) -> AppResult<Self> {
        let mut variables = Map::new();
        for var in &table.variables {
            variables.insert(var.name.to_string(), variable_value(var)?);
        }

        Ok(Self {
            dimensions: Dimensions {
                time: table.len(),
                location: 1,
            },
            variables,
            global_attributes: GlobalAttributes {
                title: "Ocean Insight AI - Sample Ocean Data",
                institution: "Ocean Insight AI",
                source: "Satellite and buoy observations",
                created: created.to_rfc3339_opts(SecondsFormat::Millis, true),
            },
        })
    }
}

fn variable_value(var: &Variable) -> AppResult<Value> {
    Ok(serde_json::to_value(var)?)
}

pub(crate) fn export_netcdf(
    table: &ExportTable,
    path: &Path,
    created: DateTime<Utc>,
) -> AppResult<()> {
    info(format!("Exporting to NetCDF (JSON): {}", path.display()));

    let doc = NetcdfDocument::from_table(table, created)?;
    let json = serde_json::to_string_pretty(&doc)?;
    fs::write(path, json)?;

    notify_export_success("NetCDF", path);
    Ok(())
}
