use crate::models::alert::{Alert, Severity};

/// Notifications, newest first.
pub static NOTIFICATIONS: &[Alert] = &[
    Alert {
        id: "alert_001",
        severity: Severity::Info,
        title: "New Float Deployed",
        message: "Float #2902920 successfully deployed in Bay of Bengal (16.45°N, 86.78°E)",
        timestamp: "2025-09-26T13:45:00Z",
        region: Some("Bay of Bengal"),
        float_id: Some("2902920"),
    },
    Alert {
        id: "alert_002",
        severity: Severity::Warning,
        title: "Sensor Drift Detected",
        message: "Possible salinity sensor drift in Float #2902907. QC flags updated.",
        timestamp: "2025-09-26T11:20:00Z",
        region: Some("Arabian Sea"),
        float_id: Some("2902907"),
    },
    Alert {
        id: "alert_003",
        severity: Severity::Critical,
        title: "Oxygen Level Alert",
        message: "Arabian Sea oxygen levels dropped 5% in the last 30 days - monitoring required",
        timestamp: "2025-09-26T08:15:00Z",
        region: Some("Arabian Sea"),
        float_id: None,
    },
    Alert {
        id: "alert_004",
        severity: Severity::Info,
        title: "Data Processing Complete",
        message: "Daily processing completed: 12,500 profiles validated and uploaded to GDAC",
        timestamp: "2025-09-26T06:30:00Z",
        region: None,
        float_id: None,
    },
    Alert {
        id: "alert_005",
        severity: Severity::Warning,
        title: "Communication Gap",
        message: "Float #2902914 missed scheduled transmission - last contact 3 days ago",
        timestamp: "2025-09-25T14:20:00Z",
        region: Some("North Pacific"),
        float_id: Some("2902914"),
    },
];
