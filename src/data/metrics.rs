use crate::models::metrics::{Activity, DashboardMetrics};

pub static DASHBOARD_METRICS: DashboardMetrics = DashboardMetrics {
    active_floats: 4120,
    new_profiles: 12500,
    data_quality: 94.2,
    last_update: "26 Sept 2025 - 14:30 UTC",
    total_profiles: 2_847_639,
    global_coverage: 87.3,
};

pub static RECENT_ACTIVITY: &[Activity] = &[
    Activity {
        id: "1",
        kind: "deployment",
        title: "New Float Deployed",
        description: "Float #2902920 deployed in Bay of Bengal",
        timestamp: "2025-09-26T13:45:00Z",
        location: "16.45°N, 86.78°E",
    },
    Activity {
        id: "2",
        kind: "data",
        title: "Daily Processing Complete",
        description: "12,500 profiles processed and validated",
        timestamp: "2025-09-26T06:30:00Z",
        location: "Global",
    },
    Activity {
        id: "3",
        kind: "alert",
        title: "Sensor Drift Detected",
        description: "Salinity sensor drift in Float #2902907",
        timestamp: "2025-09-26T11:20:00Z",
        location: "Arabian Sea",
    },
    Activity {
        id: "4",
        kind: "maintenance",
        title: "System Maintenance",
        description: "Scheduled GDAC synchronization completed",
        timestamp: "2025-09-26T04:00:00Z",
        location: "Infrastructure",
    },
    Activity {
        id: "5",
        kind: "milestone",
        title: "Data Milestone",
        description: "Reached 2.8M total profiles in database",
        timestamp: "2025-09-25T18:30:00Z",
        location: "Global",
    },
];
