use crate::models::region::RegionalSummary;
use crate::models::trend::Trend;

pub static REGIONAL_DATA: &[RegionalSummary] = &[
    RegionalSummary {
        region: "Arabian Sea",
        float_count: 287,
        avg_temperature: 24.9,
        avg_salinity: 36.3,
        avg_oxygen: 155.6,
        trend: Trend::Down,
        change_percent: -2.3,
    },
    RegionalSummary {
        region: "Bay of Bengal",
        float_count: 194,
        avg_temperature: 28.8,
        avg_salinity: 33.8,
        avg_oxygen: 177.6,
        trend: Trend::Stable,
        change_percent: 0.8,
    },
    RegionalSummary {
        region: "Southern Ocean",
        float_count: 523,
        avg_temperature: 4.1,
        avg_salinity: 34.7,
        avg_oxygen: 287.9,
        trend: Trend::Up,
        change_percent: 3.2,
    },
    RegionalSummary {
        region: "North Pacific",
        float_count: 1456,
        avg_temperature: 19.8,
        avg_salinity: 35.0,
        avg_oxygen: 203.5,
        trend: Trend::Stable,
        change_percent: -0.2,
    },
    RegionalSummary {
        region: "North Atlantic",
        float_count: 892,
        avg_temperature: 15.2,
        avg_salinity: 35.8,
        avg_oxygen: 245.1,
        trend: Trend::Up,
        change_percent: 1.7,
    },
    RegionalSummary {
        region: "South Pacific",
        float_count: 768,
        avg_temperature: 12.4,
        avg_salinity: 34.6,
        avg_oxygen: 225.3,
        trend: Trend::Down,
        change_percent: -1.1,
    },
];
