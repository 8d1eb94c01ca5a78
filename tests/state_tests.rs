use floatchat::core::briefing;
use floatchat::core::state::{Action, AppState, Outcome, Tab};
use floatchat::data::{GREETING, OCEANS};
use floatchat::errors::AppError;
use floatchat::models::chat::Role;

#[test]
fn test_new_state_starts_with_greeting() {
    let state = AppState::new();

    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].id, 1);
    assert_eq!(state.messages[0].role, Role::Assistant);
    assert_eq!(state.messages[0].text, GREETING);
    assert_eq!(state.active_tab, Tab::All);
    assert_eq!(state.watchlist.len(), 5);
}

#[test]
fn test_send_appends_user_and_assistant() {
    let mut state = AppState::new();

    let outcome = state
        .apply(Action::Send("  Show me temperature in the Arabian Sea  ".to_string()))
        .expect("send");

    assert_eq!(state.messages.len(), 3);
    assert_eq!(state.messages[1].role, Role::User);
    assert_eq!(state.messages[1].text, "Show me temperature in the Arabian Sea");
    assert_eq!(state.messages[2].role, Role::Assistant);
    assert!(state.messages[2].has_query());

    match outcome {
        Outcome::Reply(msg) => assert_eq!(msg, state.messages[2]),
        other => panic!("unexpected outcome: {other:?}"),
    }

    // ids keep increasing
    assert!(state.messages[0].id < state.messages[1].id);
    assert!(state.messages[1].id < state.messages[2].id);
}

#[test]
fn test_blank_send_is_ignored() {
    let mut state = AppState::new();

    let outcome = state.apply(Action::Send("   ".to_string())).expect("send");
    assert_eq!(outcome, Outcome::Ignored);
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn test_fresh_chat_resets_transcript() {
    let mut state = AppState::new();
    state.apply(Action::Send("hello".to_string())).expect("send");
    state.apply(Action::Send("oxygen".to_string())).expect("send");
    assert_eq!(state.messages.len(), 5);

    let outcome = state.apply(Action::FreshChat).expect("fresh");
    assert_eq!(outcome, Outcome::Reset);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].text, GREETING);
}

#[test]
fn test_toggle_watch_twice_restores() {
    let mut state = AppState::new();
    let before = state.watchlist.clone();

    let first = state.apply(Action::ToggleWatch("3".to_string())).expect("toggle");
    assert_eq!(
        first,
        Outcome::Watch {
            id: "3".to_string(),
            watched: true
        }
    );

    let second = state.apply(Action::ToggleWatch("3".to_string())).expect("toggle");
    assert_eq!(
        second,
        Outcome::Watch {
            id: "3".to_string(),
            watched: false
        }
    );
    assert_eq!(state.watchlist, before);
}

#[test]
fn test_toggle_unknown_id_fails() {
    let mut state = AppState::new();
    let err = state
        .apply(Action::ToggleWatch("99".to_string()))
        .expect_err("unknown id");
    assert!(matches!(err, AppError::UnknownOcean(id) if id == "99"));
}

#[test]
fn test_visible_oceans_search_then_tab() {
    let mut state = AppState::new();
    assert_eq!(state.visible_oceans().len(), OCEANS.len());

    state.apply(Action::Search("pacific".to_string())).expect("search");
    let names: Vec<&str> = state.visible_oceans().iter().map(|o| o.name).collect();
    assert!(names.contains(&"Pacific Ocean"));
    assert!(names.contains(&"Bering Sea"));

    state.apply(Action::SelectTab(Tab::Watchlist)).expect("tab");
    let names: Vec<&str> = state.visible_oceans().iter().map(|o| o.name).collect();
    assert_eq!(names, vec!["Bering Sea"]);
}

#[test]
fn test_watchlist_from_config_names() {
    let names = vec![
        "red sea".to_string(),
        "Atlantis".to_string(),
        "Arabic Ocean".to_string(),
    ];
    let state = AppState::from_names(&names);

    assert_eq!(state.watchlist.len(), 2);
    assert!(state.watchlist.contains("7"));
    assert!(state.watchlist.contains("2"));
}

#[test]
fn test_find_ocean_alias_and_case() {
    assert_eq!(briefing::find_ocean("arabic ocean").expect("alias").name, "Arabian Sea");
    assert_eq!(briefing::find_ocean("  BALTIC sea ").expect("case").id, "15");

    let err = briefing::find_ocean("Atlantis").expect_err("unknown");
    assert!(matches!(err, AppError::UnknownOcean(name) if name == "Atlantis"));
}

#[test]
fn test_compare_second_minus_first() {
    let indian = briefing::find_ocean("Indian Ocean").expect("indian");
    let arabian = briefing::find_ocean("Arabian Sea").expect("arabian");

    let cmp = briefing::compare(indian, arabian);
    assert_eq!(cmp.first, "Indian Ocean");
    assert_eq!(cmp.second, "Arabian Sea");
    assert_eq!(cmp.temperature, 0.7);
    assert_eq!(cmp.salinity, 1.5);
    assert_eq!(cmp.wave_height, -0.3);
    assert_eq!(cmp.wind_speed, -2.6);
}

#[test]
fn test_search_matches_region_too() {
    let rows = briefing::search(OCEANS, "northern indian");
    let names: Vec<&str> = rows.iter().map(|o| o.name).collect();
    assert_eq!(names, vec!["Arabian Sea", "Bay of Bengal"]);

    assert_eq!(briefing::search(OCEANS, "").len(), OCEANS.len());
}
