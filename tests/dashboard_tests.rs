use floatchat::core::dashboard;
use floatchat::data::{NOTIFICATIONS, REGIONAL_DATA};
use floatchat::models::alert::{Alert, Severity};
use floatchat::models::metrics::SystemStatus;
use floatchat::models::region::RegionStatus;

fn alert(severity: Severity) -> Alert {
    Alert {
        id: "test",
        severity,
        title: "Test",
        message: "test alert",
        timestamp: "2025-09-26T00:00:00Z",
        region: None,
        float_id: None,
    }
}

#[test]
fn test_active_floats_and_quality() {
    assert_eq!(dashboard::active_float_count(), 8);
    assert_eq!(dashboard::data_quality_percentage(), 90.0);
}

#[test]
fn test_sample_alerts_make_status_critical() {
    assert_eq!(dashboard::active_alert_count(), 3);
    assert_eq!(dashboard::system_status(), SystemStatus::Critical);
}

#[test]
fn test_status_thresholds() {
    assert_eq!(
        dashboard::status_for_alerts(&[]),
        SystemStatus::Operational
    );
    assert_eq!(
        dashboard::status_for_alerts(&[alert(Severity::Warning), alert(Severity::Warning)]),
        SystemStatus::Operational
    );
    assert_eq!(
        dashboard::status_for_alerts(&[
            alert(Severity::Warning),
            alert(Severity::Warning),
            alert(Severity::Warning)
        ]),
        SystemStatus::Warning
    );
    assert_eq!(
        dashboard::status_for_alerts(&[alert(Severity::Info), alert(Severity::Critical)]),
        SystemStatus::Critical
    );
}

#[test]
fn test_recent_alerts_are_capped() {
    assert_eq!(dashboard::recent_alerts(2).len(), 2);
    assert_eq!(dashboard::recent_alerts(2)[0].id, "alert_001");
    assert_eq!(dashboard::recent_alerts(50).len(), NOTIFICATIONS.len());
    assert!(dashboard::recent_alerts(0).is_empty());
}

#[test]
fn test_latest_float() {
    let f = dashboard::latest_float().expect("sample floats");
    assert_eq!(f.id, "2902913");
}

#[test]
fn test_floats_by_region() {
    assert_eq!(dashboard::floats_by_region("Arabian Sea").len(), 3);
    assert_eq!(dashboard::floats_by_region("Bay of Bengal").len(), 3);
    assert!(dashboard::floats_by_region("Red Sea").is_empty());
}

#[test]
fn test_region_quick_view() {
    let view = dashboard::region_quick_view();
    assert_eq!(view.len(), REGIONAL_DATA.len());

    let arabian = view
        .iter()
        .find(|r| r.region == "Arabian Sea")
        .expect("arabian sea row");
    assert_eq!(arabian.coverage, 6);
    assert_eq!(arabian.status, RegionStatus::Normal);

    let pacific = view
        .iter()
        .find(|r| r.region == "North Pacific")
        .expect("north pacific row");
    assert_eq!(pacific.coverage, 29);
}
