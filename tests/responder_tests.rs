use floatchat::core::query::QueryTemplate;
use floatchat::core::responder::{QUERY_CLOSING, Topic, is_data_request, respond};

#[test]
fn test_arabian_sea_temperature_request_attaches_query() {
    let reply = respond("Show me temperature profiles in the Arabian Sea");

    assert_eq!(reply.topic, Topic::Temperature);
    assert!(reply.has_query);

    let sql = reply.query.as_deref().expect("query attached");
    assert!(sql.contains("BETWEEN 10 AND 25"));
    assert!(sql.contains("BETWEEN 60 AND 75"));

    assert!(reply.narrative.contains("Arabian Sea"));
    assert!(reply.narrative.contains("**287 active floats**"));
    assert!(reply.narrative.contains("24.9°C"));
    assert!(reply.narrative.ends_with(QUERY_CLOSING));
}

#[test]
fn test_temperature_profile_sentence_selects_profile_query() {
    let reply = respond("Show me the temperature profile for the Arabian Sea");

    assert_eq!(reply.topic, Topic::Temperature);
    assert!(reply.has_query);

    let sql = reply.query.as_deref().expect("query attached");
    assert!(sql.contains("f.float_id"));
    assert!(sql.contains("p.depth"));
    assert!(sql.contains("p.temperature"));
    assert!(reply.narrative.contains("Arabian Sea"));
}

#[test]
fn test_greeting_is_general_without_query() {
    let reply = respond("hello");

    assert_eq!(reply.topic, Topic::General);
    assert!(!reply.has_query);
    assert!(reply.query.is_none());
    assert!(reply.narrative.contains("Argo"));
    assert!(!reply.narrative.contains(QUERY_CLOSING));
}

#[test]
fn test_empty_input_still_replies() {
    let reply = respond("");
    assert_eq!(reply.topic, Topic::General);
    assert!(!reply.has_query);
    assert!(!reply.narrative.is_empty());
}

#[test]
fn test_topic_priority_order() {
    // temperature beats salinity, salinity beats depth
    assert_eq!(Topic::classify("temperature and salinity"), Topic::Temperature);
    assert_eq!(Topic::classify("salinity profile"), Topic::Salinity);
    assert_eq!(Topic::classify("where is float 2902905"), Topic::Location);
    assert_eq!(Topic::classify("seasonal pattern"), Topic::Trends);
    assert_eq!(Topic::classify("compare each basin"), Topic::Regions);
    assert_eq!(Topic::classify("qc summary"), Topic::Quality);
    assert_eq!(Topic::classify("tell me something"), Topic::General);
}

#[test]
fn test_classification_is_case_insensitive() {
    let reply = respond("OXYGEN LEVELS PLEASE");
    assert_eq!(reply.topic, Topic::Oxygen);
}

#[test]
fn test_bay_of_bengal_oxygen_template() {
    let reply = respond("Find oxygen data for the Bay of Bengal");

    assert_eq!(reply.topic, Topic::Oxygen);
    assert!(reply.narrative.contains("Bay of Bengal"));
    assert!(reply.narrative.contains("177.6"));

    let sql = reply.query.expect("query attached");
    assert!(sql.contains("AVG(p.oxygen)"));
    assert!(sql.contains("BETWEEN 80 AND 95"));
}

#[test]
fn test_other_data_requests_get_recent_profiles() {
    let reply = respond("show me salinity");
    assert_eq!(reply.topic, Topic::Salinity);
    assert_eq!(
        reply.query.as_deref(),
        Some(QueryTemplate::RecentProfiles.sql())
    );
    assert!(reply.narrative.contains("worldwide"));
}

#[test]
fn test_template_selection() {
    assert_eq!(
        QueryTemplate::select("temperature in the arabian sea"),
        QueryTemplate::ArabianSeaTemperature
    );
    assert_eq!(
        QueryTemplate::select("oxygen bay of bengal"),
        QueryTemplate::BayOfBengalOxygen
    );
    assert_eq!(
        QueryTemplate::select("temperature near bengal"),
        QueryTemplate::RecentProfiles
    );
}

#[test]
fn test_data_request_keywords() {
    assert!(is_data_request("give me the data"));
    assert!(is_data_request("write sql for it"));
    assert!(!is_data_request("explain ocean warming"));
}

#[test]
fn test_global_scope_uses_network_figures() {
    let reply = respond("what is the average temperature");
    assert_eq!(reply.topic, Topic::Temperature);
    assert!(reply.narrative.contains("4,120"));
    assert!(reply.narrative.contains("worldwide"));
    assert!(!reply.has_query);
}

#[test]
fn test_quality_narrative_counts_questionable_floats() {
    let reply = respond("how is data quality?");
    assert_eq!(reply.topic, Topic::Quality);
    assert!(reply.narrative.contains("90.0%"));
    assert!(reply.narrative.contains("1 is"));
}

#[test]
fn test_location_reports_latest_float() {
    let reply = respond("where are the floats located");
    assert_eq!(reply.topic, Topic::Location);
    assert!(reply.narrative.contains("2902913"));
}
