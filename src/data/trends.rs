use crate::models::trend::TrendPoint;

const fn point(
    date: &'static str,
    temperature: f64,
    salinity: f64,
    oxygen: f64,
    profile_count: u32,
) -> TrendPoint {
    TrendPoint {
        date,
        temperature,
        salinity,
        oxygen,
        profile_count,
    }
}

/// Global 30-day series, one point every two days.
pub static TREND_DATA: &[TrendPoint] = &[
    point("2025-08-27", 19.2, 34.8, 215.3, 11800),
    point("2025-08-29", 19.4, 34.9, 214.8, 12100),
    point("2025-08-31", 19.1, 34.7, 216.1, 11950),
    point("2025-09-02", 19.6, 35.0, 213.9, 12300),
    point("2025-09-04", 19.8, 35.1, 212.7, 12450),
    point("2025-09-06", 19.5, 34.8, 214.2, 12200),
    point("2025-09-08", 19.9, 35.2, 211.8, 12580),
    point("2025-09-10", 20.1, 35.0, 213.4, 12650),
    point("2025-09-12", 19.7, 34.9, 215.0, 12400),
    point("2025-09-14", 20.3, 35.3, 210.6, 12750),
    point("2025-09-16", 20.0, 35.1, 212.9, 12600),
    point("2025-09-18", 19.8, 34.8, 214.7, 12350),
    point("2025-09-20", 20.2, 35.2, 211.3, 12800),
    point("2025-09-22", 20.4, 35.4, 209.8, 12900),
    point("2025-09-24", 20.1, 35.0, 213.1, 12700),
    point("2025-09-26", 19.9, 34.9, 214.5, 12500),
];
