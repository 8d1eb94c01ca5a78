mod common;
use common::{fc, fc_with, setup_test_config};
use floatchat::config::{Config, migrate};
use predicates::str::contains;
use std::fs;
use std::path::Path;

#[test]
fn test_init_creates_config_once() {
    let cfg = setup_test_config("init_once");

    fc().args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("Config file created"));

    let content = fs::read_to_string(&cfg).expect("config written");
    assert!(content.contains("response_delay_ms: 1500"));
    assert!(content.contains("wrap_width: 100"));
    assert!(content.contains("Bering Sea"));

    fc().args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("already present"));
}

#[test]
fn test_missing_config_loads_defaults() {
    let cfg = setup_test_config("missing_defaults");
    let loaded = Config::load_from(Path::new(&cfg)).expect("defaults");
    assert_eq!(loaded, Config::default());
    assert_eq!(loaded.separator(), '-');
    assert_eq!(loaded.response_delay().as_millis(), 1500);
}

#[test]
fn test_partial_config_fills_defaults() {
    let cfg = setup_test_config("partial_config");
    fs::write(&cfg, "wrap_width: 80\nwatchlist:\n  - Red Sea\n").expect("write config");

    let loaded = Config::load_from(Path::new(&cfg)).expect("load");
    assert_eq!(loaded.wrap_width, 80);
    assert_eq!(loaded.watchlist, vec!["Red Sea".to_string()]);
    assert_eq!(loaded.response_delay_ms, 1500);
    assert_eq!(loaded.separator_char, "-");
}

#[test]
fn test_invalid_separator_is_rejected() {
    let cfg = setup_test_config("invalid_separator");
    fs::write(&cfg, "separator_char: \"==\"\n").expect("write config");

    assert!(Config::load_from(Path::new(&cfg)).is_err());

    fc_with(&cfg)
        .arg("oceans")
        .assert()
        .failure()
        .stderr(contains("separator_char"));

    // config stays inspectable
    fc_with(&cfg).args(["config", "--check"]).assert().success();
}

#[test]
fn test_config_check_and_migrate() {
    let cfg = setup_test_config("check_migrate");
    fs::write(&cfg, "wrap_width: 80\nlegacy_db: old.sqlite\n").expect("write config");

    fc_with(&cfg)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields (defaults in use)"))
        .stdout(contains("response_delay_ms"))
        .stdout(contains("Unknown fields ignored: legacy_db"));

    fc_with(&cfg)
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Configuration migrated"));

    assert!(migrate::missing_fields(Path::new(&cfg)).expect("read").is_empty());

    // existing values survive the migration
    let loaded = Config::load_from(Path::new(&cfg)).expect("load");
    assert_eq!(loaded.wrap_width, 80);

    fc_with(&cfg)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("All configuration fields are present."));

    fc_with(&cfg)
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("is up to date"));
}

#[test]
fn test_config_print() {
    let cfg = setup_test_config("config_print");
    fs::write(&cfg, "response_delay_ms: 0\n").expect("write config");

    fc_with(&cfg)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("response_delay_ms: 0"))
        .stdout(contains("separator_char"));
}

#[test]
fn test_save_and_reload() {
    let cfg = setup_test_config("save_reload");
    let mut c = Config::default();
    c.wrap_width = 72;
    c.watchlist = vec!["North Sea".to_string()];
    c.save_to(Path::new(&cfg)).expect("save");

    let loaded = Config::load_from(Path::new(&cfg)).expect("load");
    assert_eq!(loaded, c);
}

#[test]
fn test_config_watchlist_drives_oceans() {
    let cfg = setup_test_config("config_watchlist");
    fs::write(&cfg, "watchlist:\n  - North Sea\n  - Atlantis\n").expect("write config");

    fc_with(&cfg)
        .args(["oceans", "--watchlist"])
        .assert()
        .success()
        .stdout(contains("North Sea"))
        .stdout(contains("1 oceans shown, 1 in watchlist"));
}
