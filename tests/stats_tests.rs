use floatchat::core::stats::{
    Bounds, Dataset, Field, Summary, TemperatureBand, summarize, summarize_values, total,
};
use floatchat::data::{CARIBBEAN_MEASUREMENTS, SAMPLE_FLOATS};
use floatchat::errors::AppError;
use floatchat::models::measurement::Measurement;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_measurement_temperature_summary() {
    let s = summarize(CARIBBEAN_MEASUREMENTS, Field::Temperature).expect("summary");

    assert_eq!(s.count, 19);
    assert!(approx(s.min, 11.245));
    assert!(approx(s.max, 11.825));
    assert!(s.min <= s.mean && s.mean <= s.max);
}

#[test]
fn test_total_pressure_count() {
    let sum = total(CARIBBEAN_MEASUREMENTS, Field::PressureCount).expect("total");
    assert!(approx(sum, 19136.0));
}

#[test]
fn test_unsupported_field_is_an_error() {
    let err = Dataset::Measurements
        .summarize(Field::Salinity)
        .expect_err("measurements carry no salinity");

    match err {
        AppError::UnsupportedField { dataset, field } => {
            assert_eq!(dataset, "measurements");
            assert_eq!(field, "salinity");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_empty_dataset_is_an_error() {
    let empty: &[Measurement] = &[];
    let err = summarize(empty, Field::Temperature).expect_err("empty input");
    assert!(matches!(err, AppError::EmptyDataset("measurements")));
    assert!(summarize_values(&[]).is_none());
}

#[test]
fn test_single_value_summary() {
    let s = summarize_values(&[4.2]).expect("summary");
    assert_eq!(s.count, 1);
    assert!(approx(s.min, 4.2));
    assert!(approx(s.max, 4.2));
    assert!(approx(s.mean, 4.2));
    assert!(approx(s.range(), 0.0));
}

#[test]
fn test_mean_stays_within_bounds_for_every_dataset() {
    let cases = [
        (Dataset::Measurements, Field::Temperature),
        (Dataset::Floats, Field::Oxygen),
        (Dataset::Profile, Field::Salinity),
        (Dataset::Trends, Field::ProfileCount),
        (Dataset::Regions, Field::FloatCount),
        (Dataset::Oceans, Field::WindSpeed),
    ];

    for (dataset, field) in cases {
        let s = dataset.summarize(field).expect("summary");
        assert!(s.count > 0, "{} empty", dataset.as_str());
        assert!(
            s.min <= s.mean && s.mean <= s.max,
            "{} {}: {:?}",
            dataset.as_str(),
            field.as_str(),
            s
        );
    }
}

#[test]
fn test_float_depth_summary() {
    let s = summarize(SAMPLE_FLOATS, Field::Depth).expect("summary");
    assert_eq!(s.count, 10);
    assert!(approx(s.min, 1756.0));
    assert!(approx(s.max, 3200.0));
}

#[test]
fn test_temperature_bands() {
    let s = Summary {
        min: 10.0,
        max: 20.0,
        mean: 15.0,
        count: 3,
    };

    assert_eq!(TemperatureBand::classify(10.0, &s), TemperatureBand::Cool);
    assert_eq!(TemperatureBand::classify(12.0, &s), TemperatureBand::Cool);
    assert_eq!(TemperatureBand::classify(15.0, &s), TemperatureBand::Medium);
    assert_eq!(TemperatureBand::classify(19.0, &s), TemperatureBand::Warm);
    assert_eq!(TemperatureBand::classify(20.0, &s), TemperatureBand::Warm);
}

#[test]
fn test_flat_range_is_medium() {
    let s = Summary {
        min: 11.0,
        max: 11.0,
        mean: 11.0,
        count: 2,
    };
    assert_eq!(TemperatureBand::classify(11.0, &s), TemperatureBand::Medium);
}

#[test]
fn test_relative_position_inside_bounds() {
    let b = Bounds::of(CARIBBEAN_MEASUREMENTS).expect("bounds");

    // northernmost point sits at the top edge, southernmost at the bottom
    let (_, top) = b.relative_position(b.max_lat, b.min_lon);
    let (_, bottom) = b.relative_position(b.min_lat, b.min_lon);
    assert!(approx(top, 0.0));
    assert!(approx(bottom, 100.0));

    let (x_west, _) = b.relative_position(b.min_lat, b.min_lon);
    let (x_east, _) = b.relative_position(b.min_lat, b.max_lon);
    assert!(approx(x_west, 0.0));
    assert!(approx(x_east, 100.0));

    for m in CARIBBEAN_MEASUREMENTS {
        let (x, y) = b.relative_position(m.latitude, m.longitude);
        assert!((0.0..=100.0).contains(&x));
        assert!((0.0..=100.0).contains(&y));
    }
}

#[test]
fn test_degenerate_bounds_center_the_point() {
    let b = Bounds {
        min_lat: 5.0,
        max_lat: 5.0,
        min_lon: 7.0,
        max_lon: 7.0,
    };
    assert_eq!(b.relative_position(5.0, 7.0), (50.0, 50.0));
    assert_eq!(b.center(), (5.0, 7.0));
}

#[test]
fn test_only_located_datasets_have_bounds() {
    assert!(Dataset::Measurements.bounds().is_some());
    assert!(Dataset::Floats.bounds().is_some());
    assert!(Dataset::Oceans.bounds().is_none());
}

#[test]
fn test_mean_matches_arithmetic_average() {
    let expected = CARIBBEAN_MEASUREMENTS
        .iter()
        .map(|m| m.temperature)
        .sum::<f64>()
        / CARIBBEAN_MEASUREMENTS.len() as f64;

    let first = summarize(CARIBBEAN_MEASUREMENTS, Field::Temperature).expect("summary");
    assert!(approx(first.mean, expected));

    // no hidden state between calls
    let second = summarize(CARIBBEAN_MEASUREMENTS, Field::Temperature).expect("summary");
    assert_eq!(first, second);
}

#[test]
fn test_nan_values_do_not_panic() {
    let s = summarize_values(&[f64::NAN]).expect("non-empty input");
    assert_eq!(s.count, 1);
    assert!(s.mean.is_nan());

    let mixed = summarize_values(&[2.0, f64::NAN, 4.0]).expect("non-empty input");
    assert_eq!(mixed.count, 3);
}
