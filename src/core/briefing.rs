//! Ocean information cards and pairwise comparisons.

use crate::data::OCEANS;
use crate::errors::{AppError, AppResult};
use crate::models::ocean::{Ocean, OceanComparison};

/// Alternative spellings accepted by [`find_ocean`].
const ALIASES: &[(&str, &str)] = &[("arabic ocean", "Arabian Sea")];

/// Case-insensitive lookup by name (or alias).
pub fn find_ocean(query: &str) -> AppResult<&'static Ocean> {
    let wanted = query.trim().to_lowercase();

    let name = ALIASES
        .iter()
        .find(|(alias, _)| *alias == wanted)
        .map(|(_, name)| name.to_lowercase())
        .unwrap_or(wanted);

    OCEANS
        .iter()
        .find(|o| o.name.to_lowercase() == name)
        .ok_or_else(|| AppError::UnknownOcean(query.trim().to_string()))
}

pub fn find_by_id(id: &str) -> Option<&'static Ocean> {
    OCEANS.iter().find(|o| o.id == id)
}

/// Differences `second - first`, one decimal.
pub fn compare(first: &Ocean, second: &Ocean) -> OceanComparison {
    OceanComparison {
        first: first.name,
        second: second.name,
        temperature: round1(second.temperature - first.temperature),
        salinity: round1(second.salinity - first.salinity),
        wave_height: round1(second.wave_height - first.wave_height),
        wind_speed: round1(second.wind_speed - first.wind_speed),
    }
}

/// Rows whose name or region contains `term`, ignoring case.
/// An empty term keeps every row.
pub fn search<'a, I>(rows: I, term: &str) -> Vec<&'a Ocean>
where
    I: IntoIterator<Item = &'a Ocean>,
{
    let term = term.trim().to_lowercase();

    rows.into_iter()
        .filter(|o| {
            term.is_empty()
                || o.name.to_lowercase().contains(&term)
                || o.region.to_lowercase().contains(&term)
        })
        .collect()
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
