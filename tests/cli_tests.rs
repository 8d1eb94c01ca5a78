mod common;
use common::{fc_with, setup_test_config, temp_out};
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use std::fs;

#[test]
fn test_chat_one_shot_prints_reply_and_sql() {
    let cfg = setup_test_config("chat_one_shot");

    fc_with(&cfg)
        .args(["chat", "Show me temperature profiles in the Arabian Sea"])
        .assert()
        .success()
        .stdout(contains("FloatChat"))
        .stdout(contains("SELECT"))
        .stdout(contains("BETWEEN 10 AND 25"));
}

#[test]
fn test_chat_json_reply() {
    let cfg = setup_test_config("chat_json");

    let output = fc_with(&cfg)
        .args(["chat", "--json", "Show", "me", "temperature", "in", "the", "Arabian", "Sea"])
        .output()
        .expect("run chat");
    assert!(output.status.success());

    let reply: Value = serde_json::from_slice(&output.stdout).expect("json reply");
    assert_eq!(reply["topic"], "temperature");
    assert_eq!(reply["has_query"], true);
    assert!(reply["query"].as_str().is_some_and(|q| q.contains("BETWEEN 60 AND 75")));

    let narrative = reply["narrative"].as_str().expect("narrative");
    assert!(narrative.contains("287 active floats"));
    assert!(!narrative.contains("**"));
}

#[test]
fn test_chat_json_general_has_no_query_field() {
    let cfg = setup_test_config("chat_json_general");

    let output = fc_with(&cfg)
        .args(["chat", "--json", "hello"])
        .output()
        .expect("run chat");
    assert!(output.status.success());

    let reply: Value = serde_json::from_slice(&output.stdout).expect("json reply");
    assert_eq!(reply["topic"], "general");
    assert_eq!(reply["has_query"], false);
    assert!(reply.get("query").is_none());
}

#[test]
fn test_chat_blank_message_is_ignored() {
    let cfg = setup_test_config("chat_blank");

    fc_with(&cfg)
        .args(["chat", "   "])
        .assert()
        .success()
        .stdout(contains("Nothing to send"));
}

#[test]
fn test_chat_session_commands() {
    let cfg = setup_test_config("chat_session");
    let transcript = temp_out("chat_session_transcript", "json");

    let script = format!(
        "hello\n\n/watch 3\n/watch 99\n/export {transcript}\n/quit\n"
    );

    fc_with(&cfg)
        .arg("chat")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Ocean 3 added to the watchlist."))
        .stdout(contains("Transcript export completed"))
        .stderr(contains("Unknown ocean or sea: 99"));

    let content = fs::read_to_string(&transcript).expect("read transcript");
    let messages: Value = serde_json::from_str(&content).expect("valid json");
    let messages = messages.as_array().expect("array of messages");

    // greeting, "hello", reply; the blank line adds nothing
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0]["role"], "assistant");
    assert_eq!(messages[1]["role"], "user");
    assert_eq!(messages[1]["text"], "hello");
}

#[test]
fn test_chat_session_fresh_clears_history() {
    let cfg = setup_test_config("chat_fresh");
    let transcript = temp_out("chat_fresh_transcript", "json");

    let script = format!("oxygen\n/fresh\n/export {transcript}\n");

    fc_with(&cfg)
        .arg("chat")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Started a fresh chat."));

    let content = fs::read_to_string(&transcript).expect("read transcript");
    let messages: Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(messages.as_array().map(Vec::len), Some(1));
}

#[test]
fn test_stats_json() {
    let cfg = setup_test_config("stats_json");

    let output = fc_with(&cfg)
        .args(["stats", "--field", "pressure_count", "--json"])
        .output()
        .expect("run stats");
    assert!(output.status.success());

    let v: Value = serde_json::from_slice(&output.stdout).expect("json stats");
    assert_eq!(v["dataset"], "measurements");
    assert_eq!(v["field"], "pressure_count");
    assert_eq!(v["count"], 19);
    assert_eq!(v["min"], 978.0);
    assert_eq!(v["max"], 1024.0);
    assert_eq!(v["total"], 19136.0);
}

#[test]
fn test_stats_unsupported_field_fails() {
    let cfg = setup_test_config("stats_unsupported");

    fc_with(&cfg)
        .args(["stats", "--dataset", "measurements", "--field", "salinity"])
        .assert()
        .failure()
        .stderr(contains("not available for dataset 'measurements'"));
}

#[test]
fn test_measurements_summary() {
    let cfg = setup_test_config("measurements_summary");

    fc_with(&cfg)
        .arg("measurements")
        .assert()
        .success()
        .stdout(contains("Total measurements : 19,136"))
        .stdout(contains("min 11.245"))
        .stdout(contains("max 11.825"));
}

#[test]
fn test_oceans_table_and_filters() {
    let cfg = setup_test_config("oceans_table");

    fc_with(&cfg)
        .arg("oceans")
        .assert()
        .success()
        .stdout(contains("15 oceans shown, 5 in watchlist"));

    fc_with(&cfg)
        .args(["oceans", "--watchlist"])
        .assert()
        .success()
        .stdout(contains("5 oceans shown"));

    fc_with(&cfg)
        .args(["oceans", "-s", "atlantis"])
        .assert()
        .success()
        .stdout(contains("No oceans match"));
}

#[test]
fn test_ocean_card() {
    let cfg = setup_test_config("ocean_card");

    fc_with(&cfg)
        .args(["oceans", "--show", "arabic ocean"])
        .assert()
        .success()
        .stdout(contains("Arabian Sea"))
        .stdout(contains("Monthly trends"));

    fc_with(&cfg)
        .args(["oceans", "--show", "Caribbean Sea"])
        .assert()
        .success()
        .stdout(contains("not available yet"));
}

#[test]
fn test_compare_oceans() {
    let cfg = setup_test_config("compare_oceans");

    fc_with(&cfg)
        .args(["compare", "Indian Ocean", "Arabian Sea"])
        .assert()
        .success()
        .stdout(contains("Arabian Sea is warmer by 0.7°C."));

    fc_with(&cfg)
        .args(["compare", "Indian Ocean", "Atlantis"])
        .assert()
        .failure()
        .stderr(contains("Unknown ocean or sea: Atlantis"));
}

#[test]
fn test_dashboard_json() {
    let cfg = setup_test_config("dashboard_json");

    let output = fc_with(&cfg)
        .args(["dashboard", "--json"])
        .output()
        .expect("run dashboard");
    assert!(output.status.success());

    let v: Value = serde_json::from_slice(&output.stdout).expect("json dashboard");
    assert_eq!(v["system_status"], "critical");
    assert_eq!(v["active_alerts"], 3);
    assert_eq!(v["sample_active_floats"], 8);
    assert_eq!(v["metrics"]["active_floats"], 4120);
    assert_eq!(v["recent_alerts"].as_array().map(Vec::len), Some(3));
    assert_eq!(v["regions"].as_array().map(Vec::len), Some(6));
}

#[test]
fn test_dashboard_text() {
    let cfg = setup_test_config("dashboard_text");

    fc_with(&cfg)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(contains("Active floats    : 4,120"))
        .stdout(contains("Arabian Sea"))
        .stdout(contains("Recent activity"));
}

#[test]
fn test_floats_filters() {
    let cfg = setup_test_config("floats_filters");

    fc_with(&cfg)
        .args(["floats", "--region", "Arabian Sea"])
        .assert()
        .success()
        .stdout(contains("3 floats"));

    fc_with(&cfg)
        .args(["floats", "--qc", "questionable"])
        .assert()
        .success()
        .stdout(contains("2902907"))
        .stdout(contains("1 floats"));

    fc_with(&cfg)
        .args(["floats", "--region", "Atlantis"])
        .assert()
        .failure()
        .stderr(contains("Unknown region: Atlantis"));
}

#[test]
fn test_alerts_limit_and_severity() {
    let cfg = setup_test_config("alerts_limit");

    fc_with(&cfg)
        .args(["alerts", "--severity", "critical"])
        .assert()
        .success()
        .stdout(contains("Oxygen Level Alert"))
        .stdout(contains("New Float Deployed").not());

    fc_with(&cfg)
        .args(["alerts", "-n", "1"])
        .assert()
        .success()
        .stdout(contains("New Float Deployed"))
        .stdout(contains("Sensor Drift Detected").not());
}

#[test]
fn test_prompts_and_regions() {
    let cfg = setup_test_config("prompts_regions");

    fc_with(&cfg)
        .arg("prompts")
        .assert()
        .success()
        .stdout(contains("Conversation starters"));

    fc_with(&cfg)
        .arg("regions")
        .assert()
        .success()
        .stdout(contains("Southern Ocean"));
}

#[test]
fn test_chat_session_relative_export_is_rejected() {
    let cfg = setup_test_config("chat_relative_export");

    fc_with(&cfg)
        .arg("chat")
        .write_stdin("hello\n/export transcript.json\n/quit\n")
        .assert()
        .success()
        .stdout(contains("FILE must be an absolute path"))
        .stderr(contains("Output file path must be absolute: transcript.json"));

    assert!(!std::path::Path::new("transcript.json").exists());
}
