//! Scripted chat replies.
//!
//! The responder lowercases the input, picks a [`Topic`] from an ordered
//! keyword table (first match wins) and fills that topic's narrative with
//! figures from the static datasets. Independently, data-request words
//! ("show", "find", ...) attach one of the canned SQL templates.
//!
//! `respond` is total: any text, including empty text, yields a reply.

use crate::core::dashboard;
use crate::core::query::QueryTemplate;
use crate::data::{
    DASHBOARD_METRICS, REGIONAL_DATA, SAMPLE_DEPTH_PROFILE, SAMPLE_FLOATS, TREND_DATA,
};
use crate::models::float::QcFlag;
use crate::models::region::RegionalSummary;
use crate::models::trend::Trend;
use crate::utils::formatting::thousands;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Temperature,
    Salinity,
    Oxygen,
    Location,
    Trends,
    Regions,
    Depth,
    Quality,
    General,
}

/// Priority order matters: "salinity profile" is a salinity question.
const TOPIC_RULES: &[(Topic, &[&str])] = &[
    (Topic::Temperature, &["temperature"]),
    (Topic::Salinity, &["salinity"]),
    (Topic::Oxygen, &["oxygen"]),
    (Topic::Location, &["float", "location"]),
    (Topic::Trends, &["trend", "pattern"]),
    (Topic::Regions, &["region", "basin"]),
    (Topic::Depth, &["depth", "profile"]),
    (Topic::Quality, &["quality", "qc"]),
];

const DATA_REQUEST_KEYWORDS: &[&str] = &["show", "find", "query", "sql", "data"];

pub const QUERY_CLOSING: &str = "Here's the SQL query to fetch the matching records:";

impl Topic {
    /// Classifies an already lowercased input.
    pub fn classify(lowered: &str) -> Self {
        TOPIC_RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
            .map(|(topic, _)| *topic)
            .unwrap_or(Topic::General)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Temperature => "temperature",
            Topic::Salinity => "salinity",
            Topic::Oxygen => "oxygen",
            Topic::Location => "location",
            Topic::Trends => "trends",
            Topic::Regions => "regions",
            Topic::Depth => "depth",
            Topic::Quality => "quality",
            Topic::General => "general",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub topic: Topic,
    pub narrative: String,
    pub has_query: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

/// True when the input asks for records rather than an explanation.
pub fn is_data_request(lowered: &str) -> bool {
    DATA_REQUEST_KEYWORDS.iter().any(|k| lowered.contains(k))
}

pub fn respond(input: &str) -> Reply {
    let lowered = input.to_lowercase();
    let topic = Topic::classify(&lowered);
    let scope = Scope::detect(&lowered);

    let mut narrative = narrative_for(topic, &scope);

    let template = is_data_request(&lowered).then(|| QueryTemplate::select(&lowered));

    log::debug!(
        "chat topic={} scope={} template={}",
        topic.as_str(),
        scope.name,
        template.map(|t| t.as_str()).unwrap_or("none")
    );

    if template.is_some() {
        narrative.push(' ');
        narrative.push_str(QUERY_CLOSING);
    }

    Reply {
        topic,
        narrative,
        has_query: template.is_some(),
        query: template.map(|t| t.sql().to_string()),
    }
}

/// The place a narrative talks about.
struct Scope {
    name: &'static str,
    float_count: u64,
    temperature: f64,
    salinity: f64,
    oxygen: f64,
    regional: bool,
}

impl Scope {
    fn detect(lowered: &str) -> Self {
        match REGIONAL_DATA
            .iter()
            .find(|r| lowered.contains(&r.region.to_lowercase()))
        {
            Some(region) => Self::regional(region),
            None => Self::global(),
        }
    }

    fn regional(r: &'static RegionalSummary) -> Self {
        Self {
            name: r.region,
            float_count: u64::from(r.float_count),
            temperature: r.avg_temperature,
            salinity: r.avg_salinity,
            oxygen: r.avg_oxygen,
            regional: true,
        }
    }

    fn global() -> Self {
        let latest = TREND_DATA.last();
        Self {
            name: "the global Argo network",
            float_count: u64::from(DASHBOARD_METRICS.active_floats),
            temperature: latest.map(|p| p.temperature).unwrap_or_default(),
            salinity: latest.map(|p| p.salinity).unwrap_or_default(),
            oxygen: latest.map(|p| p.oxygen).unwrap_or_default(),
            regional: false,
        }
    }

    fn where_phrase(&self) -> &'static str {
        if self.regional { "in this region" } else { "worldwide" }
    }
}

fn narrative_for(topic: Topic, scope: &Scope) -> String {
    match topic {
        Topic::Temperature => format!(
            "I'll help you get the latest temperature profiles from {}. Based on our current data, \
             we have **{} active floats** {}, reporting an average temperature of **{:.1}°C**.",
            scope.name,
            thousands(scope.float_count),
            scope.where_phrase(),
            scope.temperature
        ),
        Topic::Salinity => format!(
            "Salinity measurements from **{} active floats** {} show distinct water mass \
             characteristics. The average salinity for {} is **{:.1} PSU**.",
            thousands(scope.float_count),
            scope.where_phrase(),
            scope.name,
            scope.salinity
        ),
        Topic::Oxygen => format!(
            "Oxygen levels are a crucial indicator of ocean health. Current measurements for {} \
             average **{:.1} μmol/kg** across {} active floats.",
            scope.name,
            scope.oxygen,
            thousands(scope.float_count)
        ),
        Topic::Location => location_narrative(),
        Topic::Trends => trends_narrative(),
        Topic::Regions => regions_narrative(),
        Topic::Depth => depth_narrative(),
        Topic::Quality => quality_narrative(),
        Topic::General => "I understand you're interested in oceanographic data analysis. I can help \
             you explore Argo float profiles, temperature, salinity and oxygen measurements, and \
             generate SQL queries for them. Try asking about a region such as the Arabian Sea or \
             the Bay of Bengal."
            .to_string(),
    }
}

fn location_narrative() -> String {
    let mut text = format!(
        "We are currently tracking **{} active floats** with {:.1}% global coverage. In the \
         sample set {} of {} floats are active.",
        thousands(u64::from(DASHBOARD_METRICS.active_floats)),
        DASHBOARD_METRICS.global_coverage,
        dashboard::active_float_count(),
        SAMPLE_FLOATS.len()
    );

    if let Some(f) = dashboard::latest_float() {
        text.push_str(&format!(
            " The most recent position came from float {} in the {} at {:.2}°, {:.2}°.",
            f.id, f.region, f.latitude, f.longitude
        ));
    }

    text
}

fn trends_narrative() -> String {
    let declining = REGIONAL_DATA
        .iter()
        .filter(|r| r.trend == Trend::Down)
        .count();

    match (TREND_DATA.first(), TREND_DATA.last()) {
        (Some(first), Some(last)) => format!(
            "Over the last 30 days the global mean temperature moved from **{:.1}°C** to \
             **{:.1}°C**, while dissolved oxygen went from {:.1} to {:.1} μmol/kg. {} of {} \
             monitored regions show a declining trend.",
            first.temperature,
            last.temperature,
            first.oxygen,
            last.oxygen,
            declining,
            REGIONAL_DATA.len()
        ),
        _ => format!(
            "{} of {} monitored regions show a declining trend.",
            declining,
            REGIONAL_DATA.len()
        ),
    }
}

fn regions_narrative() -> String {
    let largest = REGIONAL_DATA.iter().max_by_key(|r| r.float_count);
    let smallest = REGIONAL_DATA.iter().min_by_key(|r| r.float_count);

    let mut text = format!("We monitor **{} ocean regions**.", REGIONAL_DATA.len());
    if let (Some(big), Some(small)) = (largest, smallest) {
        text.push_str(&format!(
            " The largest fleet operates in the {} with {} floats, while the {} has {}.",
            big.region,
            thousands(u64::from(big.float_count)),
            small.region,
            thousands(u64::from(small.float_count))
        ));
    }
    text
}

fn depth_narrative() -> String {
    let min_oxygen = SAMPLE_DEPTH_PROFILE
        .iter()
        .map(|s| s.oxygen)
        .fold(f64::INFINITY, f64::min);

    match (SAMPLE_DEPTH_PROFILE.first(), SAMPLE_DEPTH_PROFILE.last()) {
        (Some(surface), Some(bottom)) => format!(
            "The latest depth profile reaches **{:.0} m** ({:.1} dbar). Temperature falls from \
             {:.1}°C at the surface to {:.1}°C at depth, and oxygen reaches a minimum of \
             {:.1} μmol/kg.",
            bottom.depth, bottom.pressure, surface.temperature, bottom.temperature, min_oxygen
        ),
        _ => "No depth profile is available right now.".to_string(),
    }
}

fn quality_narrative() -> String {
    let questionable = SAMPLE_FLOATS
        .iter()
        .filter(|f| f.qc_flag == QcFlag::Questionable)
        .count();

    format!(
        "Data quality currently stands at **{:.1}%** across {} profiles. In the sample set \
         {:.1}% of floats carry a good QC flag and {} flagged questionable under review.",
        DASHBOARD_METRICS.data_quality,
        thousands(DASHBOARD_METRICS.total_profiles),
        dashboard::data_quality_percentage(),
        if questionable == 1 {
            "1 is".to_string()
        } else {
            format!("{} are", questionable)
        }
    )
}
