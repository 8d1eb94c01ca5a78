//! Derived figures for the dashboard page.

use crate::data::{NOTIFICATIONS, REGIONAL_DATA, SAMPLE_FLOATS};
use crate::models::alert::{Alert, Severity};
use crate::models::float::FloatRecord;
use crate::models::metrics::SystemStatus;
use crate::models::region::{RegionQuickView, RegionStatus};
use crate::models::trend::Trend;

/// Floats per coverage point on the region quick view.
const FLOATS_PER_COVERAGE_POINT: f64 = 50.0;

pub fn active_float_count() -> usize {
    SAMPLE_FLOATS.iter().filter(|f| f.is_active()).count()
}

/// Share of sample floats with a good QC flag, one decimal.
pub fn data_quality_percentage() -> f64 {
    if SAMPLE_FLOATS.is_empty() {
        return 0.0;
    }

    let good = SAMPLE_FLOATS.iter().filter(|f| f.qc_flag.is_good()).count();
    let pct = good as f64 / SAMPLE_FLOATS.len() as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

pub fn floats_by_region(region: &str) -> Vec<&'static FloatRecord> {
    SAMPLE_FLOATS.iter().filter(|f| f.region == region).collect()
}

/// Float with the most recent profile timestamp.
pub fn latest_float() -> Option<&'static FloatRecord> {
    SAMPLE_FLOATS.iter().max_by_key(|f| f.last_profile_at())
}

/// First `n` notifications, newest first.
pub fn recent_alerts(n: usize) -> &'static [Alert] {
    &NOTIFICATIONS[..n.min(NOTIFICATIONS.len())]
}

pub fn active_alert_count() -> usize {
    NOTIFICATIONS
        .iter()
        .filter(|a| a.severity.is_active())
        .count()
}

pub fn system_status() -> SystemStatus {
    status_for_alerts(NOTIFICATIONS)
}

/// Critical if any alert is critical, warning above two warnings.
pub fn status_for_alerts(alerts: &[Alert]) -> SystemStatus {
    let critical = alerts.iter().any(|a| a.severity == Severity::Critical);
    let warnings = alerts
        .iter()
        .filter(|a| a.severity == Severity::Warning)
        .count();

    if critical {
        SystemStatus::Critical
    } else if warnings > 2 {
        SystemStatus::Warning
    } else {
        SystemStatus::Operational
    }
}

pub fn region_quick_view() -> Vec<RegionQuickView> {
    REGIONAL_DATA
        .iter()
        .map(|r| RegionQuickView {
            region: r.region,
            float_count: r.float_count,
            status: if r.trend == Trend::Down && r.change_percent.abs() > 3.0 {
                RegionStatus::Warning
            } else {
                RegionStatus::Normal
            },
            avg_temperature: r.avg_temperature,
            coverage: (f64::from(r.float_count) / FLOATS_PER_COVERAGE_POINT).round() as u32,
        })
        .collect()
}
