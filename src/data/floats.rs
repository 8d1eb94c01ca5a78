use crate::models::float::{FloatRecord, FloatStatus, QcFlag};

macro_rules! float {
    ($id:expr, $lat:expr, $lon:expr, $region:expr, $last:expr, $status:ident,
     $depth:expr, $temp:expr, $sal:expr, $oxy:expr, $qc:ident) => {
        FloatRecord {
            id: $id,
            latitude: $lat,
            longitude: $lon,
            region: $region,
            last_profile: $last,
            status: FloatStatus::$status,
            depth: $depth,
            temperature: $temp,
            salinity: $sal,
            oxygen: $oxy,
            qc_flag: QcFlag::$qc,
        }
    };
}

#[rustfmt::skip]
pub static SAMPLE_FLOATS: &[FloatRecord] = &[
    // Arabian Sea
    float!("2902905", 18.45, 65.32, "Arabian Sea", "2025-09-26T12:15:00Z", Active, 1850.0, 24.8, 36.2, 165.4, Good),
    float!("2902906", 20.12, 67.89, "Arabian Sea", "2025-09-26T08:30:00Z", Active, 1920.0, 25.1, 36.4, 158.7, Good),
    float!("2902907", 16.78, 62.45, "Arabian Sea", "2025-09-25T23:45:00Z", Warning, 1756.0, 24.3, 36.1, 142.8, Questionable),
    // Bay of Bengal
    float!("2902908", 15.67, 88.23, "Bay of Bengal", "2025-09-26T13:20:00Z", Active, 2100.0, 28.9, 33.8, 178.2, Good),
    float!("2902909", 18.34, 85.76, "Bay of Bengal", "2025-09-26T11:10:00Z", Active, 1980.0, 29.2, 33.5, 182.1, Good),
    float!("2902910", 12.89, 82.45, "Bay of Bengal", "2025-09-26T14:05:00Z", Active, 2250.0, 28.6, 34.1, 172.5, Good),
    // Southern Ocean
    float!("2902911", -45.23, 78.90, "Southern Ocean", "2025-09-26T09:45:00Z", Active, 2800.0, 4.2, 34.7, 280.5, Good),
    float!("2902912", -42.67, 82.15, "Southern Ocean", "2025-09-26T07:30:00Z", Active, 3200.0, 3.8, 34.8, 295.2, Good),
    // North Pacific
    float!("2902913", 35.45, 165.23, "North Pacific", "2025-09-26T15:20:00Z", Active, 2450.0, 18.7, 34.9, 210.3, Good),
    float!("2902914", 28.90, 158.67, "North Pacific", "2025-09-26T10:15:00Z", Inactive, 2100.0, 22.1, 35.2, 195.8, Good),
];
