use crate::models::profile::DepthSample;

const fn sample(
    depth: f64,
    temperature: f64,
    salinity: f64,
    oxygen: f64,
    pressure: f64,
) -> DepthSample {
    DepthSample {
        depth,
        temperature,
        salinity,
        oxygen,
        pressure,
    }
}

/// Latest profile of float 2902909 (Bay of Bengal), surface to 2000 m.
pub static SAMPLE_DEPTH_PROFILE: &[DepthSample] = &[
    sample(0.0, 29.2, 33.8, 182.1, 0.0),
    sample(10.0, 29.1, 33.9, 180.5, 1.0),
    sample(20.0, 28.9, 34.0, 178.8, 2.0),
    sample(30.0, 28.5, 34.1, 176.2, 3.0),
    sample(50.0, 27.8, 34.3, 172.6, 5.1),
    sample(75.0, 26.9, 34.5, 168.4, 7.6),
    sample(100.0, 25.7, 34.8, 163.9, 10.1),
    sample(150.0, 23.2, 35.2, 155.7, 15.2),
    sample(200.0, 20.8, 35.6, 148.3, 20.3),
    sample(300.0, 17.4, 35.9, 138.9, 30.4),
    sample(400.0, 14.9, 35.8, 132.5, 40.6),
    sample(500.0, 12.8, 35.6, 128.7, 50.7),
    sample(600.0, 11.2, 35.4, 125.9, 60.9),
    sample(800.0, 8.9, 35.0, 122.3, 81.2),
    sample(1000.0, 7.1, 34.8, 119.8, 101.5),
    sample(1200.0, 5.8, 34.7, 118.2, 121.8),
    sample(1500.0, 4.2, 34.6, 117.5, 152.3),
    sample(1800.0, 3.1, 34.6, 117.8, 182.7),
    sample(2000.0, 2.4, 34.6, 118.4, 203.0),
];
