mod common;
use common::{fc_with, setup_test_config, temp_out};
use predicates::str::contains;
use serde_json::Value;
use std::fs;
use std::path::Path;

#[test]
fn test_export_oceans_csv() {
    let cfg = setup_test_config("export_oceans_csv");
    let out = temp_out("export_oceans_csv", "csv");

    fc_with(&cfg)
        .args(["export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 16, "header plus one line per ocean");
    assert_eq!(
        lines[0],
        "Name,Region,Temperature (°C),Salinity (PSU),Wave Height (m),Wind Speed (km/h),Trend,24h Change,Status,Timestamp"
    );
    assert!(
        lines[1].starts_with("Indian Ocean,Central Basin,28.5,34.7,2.1,15.3,up,0.3,Watchlisted,")
    );
    assert!(
        content.contains(
            "Pacific Ocean,Equatorial Pacific,27.8,34.2,2.5,18.1,stable,0,Not Watchlisted,"
        )
    );
}

#[test]
fn test_export_netcdf_structure() {
    let cfg = setup_test_config("export_netcdf");
    let out = temp_out("export_netcdf", "nc.json");

    fc_with(&cfg)
        .args(["export", "--format", "netcdf", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported netcdf");
    let doc: Value = serde_json::from_str(&content).expect("valid json");

    assert_eq!(doc["dimensions"]["time"], 15);
    assert_eq!(doc["dimensions"]["location"], 1);

    let temp = &doc["variables"]["temperature"];
    assert_eq!(temp["units"], "degrees_celsius");
    assert_eq!(temp["long_name"], "Sea Surface Temperature");
    assert_eq!(temp["dimensions"], serde_json::json!(["time", "location"]));
    assert_eq!(temp["data"].as_array().map(Vec::len), Some(15));
    assert_eq!(temp["data"][0], 28.5);

    assert_eq!(doc["variables"]["salinity"]["units"], "psu");
    assert_eq!(doc["variables"]["wave_height"]["units"], "meters");
    assert_eq!(doc["variables"]["wind_speed"]["units"], "km/h");

    let attrs = &doc["global_attributes"];
    assert_eq!(attrs["title"], "Ocean Insight AI - Sample Ocean Data");
    assert_eq!(attrs["institution"], "Ocean Insight AI");
    assert_eq!(attrs["source"], "Satellite and buoy observations");
    assert!(attrs["created"].as_str().is_some_and(|s| s.ends_with('Z')));
}

#[test]
fn test_export_search_and_watchlist_filters() {
    let cfg = setup_test_config("export_filters");

    let out = temp_out("export_filters_search", "csv");
    fc_with(&cfg)
        .args(["export", "--file", &out, "--search", "northern indian"])
        .assert()
        .success();
    let content = fs::read_to_string(&out).expect("read csv");
    assert_eq!(content.lines().count(), 3);
    assert!(content.contains("Arabian Sea"));
    assert!(content.contains("Bay of Bengal"));

    let out = temp_out("export_filters_watchlist", "csv");
    fc_with(&cfg)
        .args(["export", "--file", &out, "--watchlist"])
        .assert()
        .success();
    let content = fs::read_to_string(&out).expect("read csv");
    assert_eq!(content.lines().count(), 6);
    assert!(!content.contains("Not Watchlisted"));
}

#[test]
fn test_export_empty_selection_writes_nothing() {
    let cfg = setup_test_config("export_empty");
    let out = temp_out("export_empty", "csv");

    fc_with(&cfg)
        .args(["export", "--file", &out, "--search", "atlantis"])
        .assert()
        .success()
        .stdout(contains("No records match the selected filters."));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_relative_path_is_rejected() {
    let cfg = setup_test_config("export_relative");

    fc_with(&cfg)
        .args(["export", "--file", "relative_ocean_data.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));

    assert!(!Path::new("relative_ocean_data.csv").exists());
}

#[test]
fn test_export_overwrite_needs_confirmation() {
    let cfg = setup_test_config("export_overwrite");
    let out = temp_out("export_overwrite", "csv");
    fs::write(&out, "keep me").expect("seed file");

    fc_with(&cfg)
        .args(["export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Export cancelled"));
    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    fc_with(&cfg)
        .args(["export", "--file", &out])
        .write_stdin("y\n")
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read").starts_with("Name,"));

    fs::write(&out, "again").expect("seed file");
    fc_with(&cfg)
        .args(["export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read").starts_with("Name,"));
}

#[test]
fn test_export_json_records() {
    let cfg = setup_test_config("export_json");
    let out = temp_out("export_json", "json");

    fc_with(&cfg)
        .args(["export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json");
    let rows: Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array of records");

    assert_eq!(rows.len(), 15);
    assert_eq!(rows[0]["Name"], "Indian Ocean");
    assert_eq!(rows[0]["Temperature (°C)"], 28.5);
    assert_eq!(rows[0]["Status"], "Watchlisted");
}

#[test]
fn test_export_floats_and_measurements() {
    let cfg = setup_test_config("export_datasets");

    let out = temp_out("export_datasets_floats", "csv");
    fc_with(&cfg)
        .args(["export", "--dataset", "floats", "--file", &out])
        .assert()
        .success();
    let content = fs::read_to_string(&out).expect("read csv");
    assert_eq!(content.lines().count(), 11);
    assert!(content.starts_with("Float ID,Region,"));

    let out = temp_out("export_datasets_floats_region", "csv");
    fc_with(&cfg)
        .args(["export", "--dataset", "floats", "--file", &out, "--search", "southern"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&out).expect("read csv").lines().count(), 3);

    let out = temp_out("export_datasets_measurements", "csv");
    fc_with(&cfg)
        .args(["export", "--dataset", "measurements", "--file", &out])
        .assert()
        .success();
    let content = fs::read_to_string(&out).expect("read csv");
    assert_eq!(content.lines().count(), 20);
    assert!(content.contains("11.245"));
}

#[test]
fn test_export_xlsx_and_pdf() {
    let cfg = setup_test_config("export_binary");

    let xlsx = temp_out("export_binary", "xlsx");
    fc_with(&cfg)
        .args(["export", "--format", "xlsx", "--file", &xlsx])
        .assert()
        .success();
    let bytes = fs::read(&xlsx).expect("read xlsx");
    assert!(bytes.starts_with(b"PK"), "xlsx is a zip container");

    let pdf = temp_out("export_binary", "pdf");
    fc_with(&cfg)
        .args(["export", "--format", "pdf", "--file", &pdf])
        .assert()
        .success();
    let bytes = fs::read(&pdf).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_default_file_name_in_export_dir() {
    let cfg = setup_test_config("export_default_dir");
    let mut dir = std::env::temp_dir();
    dir.push("floatchat_export_default_dir");
    fs::remove_dir_all(&dir).ok();

    fs::write(
        &cfg,
        format!("export_dir: {}\n", dir.to_string_lossy()),
    )
    .expect("write config");

    fc_with(&cfg)
        .args(["export", "--format", "netcdf"])
        .assert()
        .success();

    let entries: Vec<String> = fs::read_dir(&dir)
        .expect("export dir created")
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();

    assert_eq!(entries.len(), 1);
    assert!(entries[0].starts_with("ocean-data-"));
    assert!(entries[0].ends_with(".nc.json"));
}
