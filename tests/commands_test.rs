//! Integration tests for command handlers

use shotzone::{
    commands::{
        compare::handle_compare,
        demo::handle_demo,
        multi_player::{handle_multi_player, MAX_PLAYERS},
        profile::handle_profile,
        FetchParams,
    },
    core::{resolve_base_url, DEFAULT_BASE_URL},
    FallbackReason, Season, ShotError, BASE_URL_ENV_VAR,
};

/// Explicit base URL so handlers never read the environment mid-test.
const UNREACHABLE: &str = "http://127.0.0.1:1";

fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn offline(player_names: &[&str]) -> FetchParams {
    FetchParams {
        player_names: names(player_names),
        season: Season::new(2023),
        base_url: Some(UNREACHABLE.to_string()),
        offline: true,
        ..Default::default()
    }
}

// Env var cases share one test so they never race each other
#[test]
fn test_resolve_base_url_sources() {
    std::env::remove_var(BASE_URL_ENV_VAR);
    let url = resolve_base_url(None).unwrap();
    assert_eq!(url.as_str().trim_end_matches('/'), DEFAULT_BASE_URL);

    std::env::set_var(BASE_URL_ENV_VAR, "http://localhost:9000");
    let url = resolve_base_url(None).unwrap();
    assert_eq!(url.port(), Some(9000));

    // Flag wins over the environment
    let url = resolve_base_url(Some("http://127.0.0.1:7000")).unwrap();
    assert_eq!(url.port(), Some(7000));

    std::env::set_var(BASE_URL_ENV_VAR, "not a url");
    match resolve_base_url(None) {
        Err(ShotError::InvalidBaseUrl { url, .. }) => assert_eq!(url, "not a url"),
        other => panic!("Expected InvalidBaseUrl, got {other:?}"),
    }

    std::env::remove_var(BASE_URL_ENV_VAR);
}

#[tokio::test]
async fn test_profile_offline() {
    let profile = handle_profile(offline(&["Stephen Curry"])).await.unwrap();
    assert_eq!(profile.player_name(), "Stephen Curry");
    assert_eq!(profile.season(), Season::new(2023));
    assert_eq!(profile.fallback_reason(), Some(FallbackReason::Offline));
}

#[tokio::test]
async fn test_profile_requires_one_name() {
    let result = handle_profile(offline(&["Curry", "Durant"])).await;
    assert!(matches!(
        result,
        Err(ShotError::PlayerCount { given: 2, .. })
    ));
}

#[tokio::test]
async fn test_compare_requires_two_names() {
    let result = handle_compare(offline(&["Curry"])).await;
    assert!(matches!(
        result,
        Err(ShotError::PlayerCount {
            min: 2,
            max: 2,
            given: 1
        })
    ));
}

#[tokio::test]
async fn test_demo_never_touches_network() {
    let mut params = offline(&["Stephen Curry", "Giannis Antetokounmpo"]);
    params.offline = false;

    let profiles = handle_demo(params).await.unwrap();
    assert_eq!(profiles.len(), 2);
    assert!(profiles
        .iter()
        .all(|p| p.fallback_reason() == Some(FallbackReason::Offline)));
    assert_eq!(profiles[1].player_name(), "Giannis Antetokounmpo");
}

#[tokio::test]
async fn test_multi_player_bounds_and_order() {
    let too_many: Vec<String> = (0..=MAX_PLAYERS).map(|i| format!("Player {i}")).collect();
    let params = FetchParams {
        player_names: too_many,
        base_url: Some(UNREACHABLE.to_string()),
        offline: true,
        ..Default::default()
    };
    assert!(handle_multi_player(params).await.is_err());

    let profiles = handle_multi_player(offline(&["Embiid", "Curry", "Durant"]))
        .await
        .unwrap();
    let order: Vec<&str> = profiles.iter().map(|p| p.player_name()).collect();
    assert_eq!(order, vec!["Embiid", "Curry", "Durant"]);
}

#[tokio::test]
async fn test_json_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("compare.json");
    let mut params = offline(&["Kevin Durant", "Joel Embiid"]);
    params.output = Some(path.clone());

    handle_compare(params).await.unwrap();

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved.as_array().unwrap().len(), 2);
    assert_eq!(saved[0]["profile"]["player_name"], "Kevin Durant");
    assert_eq!(saved[1]["profile"]["fallback_reason"], "offline");
}
