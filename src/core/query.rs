//! Canned SQL templates attached to data-request replies.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryTemplate {
    ArabianSeaTemperature,
    BayOfBengalOxygen,
    RecentProfiles,
}

impl QueryTemplate {
    /// Picks the template for an already lowercased input.
    pub fn select(lowered: &str) -> Self {
        if lowered.contains("temperature") && lowered.contains("arabian") {
            QueryTemplate::ArabianSeaTemperature
        } else if lowered.contains("oxygen") && lowered.contains("bay of bengal") {
            QueryTemplate::BayOfBengalOxygen
        } else {
            QueryTemplate::RecentProfiles
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryTemplate::ArabianSeaTemperature => "arabian_sea_temperature",
            QueryTemplate::BayOfBengalOxygen => "bay_of_bengal_oxygen",
            QueryTemplate::RecentProfiles => "recent_profiles",
        }
    }

    pub fn sql(&self) -> &'static str {
        match self {
            QueryTemplate::ArabianSeaTemperature => ARABIAN_SEA_TEMPERATURE,
            QueryTemplate::BayOfBengalOxygen => BAY_OF_BENGAL_OXYGEN,
            QueryTemplate::RecentProfiles => RECENT_PROFILES,
        }
    }
}

const ARABIAN_SEA_TEMPERATURE: &str = "SELECT
    f.float_id,
    f.latitude,
    f.longitude,
    p.depth,
    p.temperature,
    p.profile_date
FROM floats f
JOIN profiles p ON f.float_id = p.float_id
WHERE f.latitude BETWEEN 10 AND 25
  AND f.longitude BETWEEN 60 AND 75
  AND p.temperature IS NOT NULL
ORDER BY p.profile_date DESC, p.depth ASC;";

const BAY_OF_BENGAL_OXYGEN: &str = "SELECT
    AVG(p.oxygen) AS avg_oxygen,
    COUNT(*) AS profile_count,
    MIN(p.oxygen) AS min_oxygen,
    MAX(p.oxygen) AS max_oxygen
FROM profiles p
JOIN floats f ON p.float_id = f.float_id
WHERE f.latitude BETWEEN 8 AND 22
  AND f.longitude BETWEEN 80 AND 95
  AND p.oxygen IS NOT NULL
  AND p.profile_date >= CURRENT_DATE - INTERVAL '30 days';";

const RECENT_PROFILES: &str = "SELECT
    f.float_id,
    f.latitude,
    f.longitude,
    p.profile_date,
    p.temperature,
    p.salinity,
    p.oxygen
FROM floats f
JOIN profiles p ON f.float_id = p.float_id
WHERE p.profile_date >= CURRENT_DATE - INTERVAL '7 days'
ORDER BY p.profile_date DESC
LIMIT 100;";
