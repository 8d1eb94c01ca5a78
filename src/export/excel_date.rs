// src/export/excel_date.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub(crate) const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Excel serial (days since 1899-12-30, fraction = time of day) of a UTC instant.
pub(crate) fn to_excel_serial(dt: &DateTime<Utc>) -> f64 {
    naive_datetime_to_excel_serial(&dt.naive_utc())
}

/// Parses an RFC 3339 timestamp or a `YYYY-MM-DD` date into an Excel
/// serial value plus its number format.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some((
            DATETIME_FORMAT,
            naive_datetime_to_excel_serial(&dt.naive_utc()),
        ));
    }

    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    let dt = d.and_hms_opt(0, 0, 0)?;
    Some(("yyyy-mm-dd", naive_datetime_to_excel_serial(&dt)))
}

fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> f64 {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default();

    let duration = *dt - excel_epoch;

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    days + secs / 86400.0
}
