mod common;

use tempfile::tempdir;
use vibe_guide::{
    services::build_instruction, FilePreferenceStore, Language, RecommendationClient, SearchState, ThemeSource, VibeSession,
};

fn offline_client() -> RecommendationClient {
    RecommendationClient::new(common::API_KEY).with_base_url("http://127.0.0.1:9")
}

#[test]
fn test_language_survives_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vibe-guide").join("preferences.json");

    let mut session = VibeSession::new(offline_client(), FilePreferenceStore::new(&path));
    assert_eq!(session.language(), Language::It);
    session.set_language(Language::Fr).unwrap();
    drop(session);

    let mut restarted = VibeSession::new(offline_client(), FilePreferenceStore::new(&path));
    assert_eq!(restarted.language(), Language::Fr);
    assert_eq!(restarted.strings().vibe_btn, "Explorer");

    let pending = restarted.begin_search("brume nordique").unwrap();
    assert_eq!(pending.query.language(), Language::Fr);
    assert!(build_instruction(&pending.query).contains("must be written in FRANÇAIS."));

    let stored = std::fs::read_to_string(&path).unwrap();
    assert!(stored.contains("\"vibeguide-lang\""));
    assert!(stored.contains("\"fr\""));
}

#[test]
fn test_language_change_recovers_from_corrupt_preference_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, "{ truncated").unwrap();

    let mut session = VibeSession::new(offline_client(), FilePreferenceStore::new(&path));
    assert_eq!(session.language(), Language::It);
    session.set_language(Language::De).unwrap();
    drop(session);

    let restarted = VibeSession::new(offline_client(), FilePreferenceStore::new(&path));
    assert_eq!(restarted.language(), Language::De);
}

#[tokio::test]
async fn test_search_end_to_end_applies_service_palette() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", common::GENERATE_PATH)
        .with_status(200)
        .with_body(common::envelope(&common::recommendation().to_string()))
        .expect(1)
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let client = RecommendationClient::new(common::API_KEY)
        .with_base_url(server.url())
        .with_model(common::MODEL);
    let mut session = VibeSession::new(client, FilePreferenceStore::new(dir.path().join("p.json")));

    assert!(session.change_mood("neon nights"));
    assert_eq!(session.theme().source(), ThemeSource::Heuristic);

    let state = session.search("neon nights").await.unwrap();
    mock.assert_async().await;

    assert_eq!(state, SearchState::Success);
    assert_eq!(session.theme().source(), ThemeSource::Service);
    assert_eq!(session.theme().current().background.as_str(), "#0B1120");
    assert_eq!(session.recommendation().unwrap().destinations[4].name, "Wadi Rum");
}

#[tokio::test]
async fn test_failed_search_shows_localized_message() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", common::GENERATE_PATH)
        .with_status(503)
        .with_body(r#"{"error":{"message":"overloaded"}}"#)
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let client = RecommendationClient::new(common::API_KEY)
        .with_base_url(server.url())
        .with_model(common::MODEL);
    let mut session = VibeSession::new(client, FilePreferenceStore::new(dir.path().join("p.json")));
    session.set_language(Language::Es).unwrap();

    let state = session.search("cansado").await.unwrap();
    assert_eq!(state, SearchState::Failed);
    assert_eq!(
        session.error_message(),
        Some("El control de vibe falló. Prueba otro estado de ánimo.")
    );
    assert!(session.recommendation().is_none());
    assert_eq!(session.theme().source(), ThemeSource::Default);
}
