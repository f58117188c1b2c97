mod common;

use mockito::Matcher;
use serde_json::json;
use vibe_guide::{
    BudgetRange, FlightTier, Language, MoodQuery, RecommendationClient, Region, ServiceError,
    Travelers, TripPreferences,
};

fn client_for(server: &mockito::ServerGuard) -> RecommendationClient {
    RecommendationClient::new(common::API_KEY)
        .with_base_url(server.url())
        .with_model(common::MODEL)
}

fn query() -> MoodQuery {
    MoodQuery::new("lunar iceland", Language::En)
        .unwrap()
        .with_budget(BudgetRange::new(50, 500).unwrap())
        .with_travelers(Travelers::new(2, 0, 1).unwrap())
        .with_preferences(TripPreferences::new(5, Region::International).unwrap())
}

#[tokio::test]
async fn test_valid_payload_is_decoded() {
    let mut server = mockito::Server::new_async().await;
    let payload = common::recommendation().to_string();
    let mock = server
        .mock("POST", common::GENERATE_PATH)
        .match_header("x-goog-api-key", common::API_KEY)
        .match_body(Matcher::PartialJson(json!({
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::envelope(&payload))
        .expect(1)
        .create_async()
        .await;

    let recommendation = client_for(&server)
        .fetch_recommendation(&query())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(recommendation.destinations.len(), 5);
    assert_eq!(recommendation.mood_tags, vec!["lunar", "stark", "quiet"]);
    assert_eq!(recommendation.color_palette.background.as_str(), "#0B1120");

    let first = &recommendation.destinations[0];
    assert_eq!(first.name, "Vik");
    assert_eq!(first.hotel.name, "Hotel Vik");
    assert_eq!(first.food.venue_name, "Sudur Vik");
    assert_eq!(first.attractions.len(), 3);
    let tiers: Vec<FlightTier> = first.flights_by_tier().iter().map(|f| f.tier).collect();
    assert_eq!(tiers, FlightTier::ALL.to_vec());
}

#[tokio::test]
async fn test_prompt_carries_all_clauses() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", common::GENERATE_PATH)
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("lunar iceland".to_string()),
            Matcher::Regex("between 50€ and 500€".to_string()),
            Matcher::Regex("2 adults, 0 children and 1 pets".to_string()),
            Matcher::Regex("Outside Europe".to_string()),
            Matcher::Regex("ENGLISH".to_string()),
        ]))
        .with_status(200)
        .with_body(common::envelope(&common::recommendation().to_string()))
        .expect(1)
        .create_async()
        .await;

    client_for(&server)
        .fetch_recommendation(&query())
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_is_reported_once_without_retry() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", common::GENERATE_PATH)
        .with_status(500)
        .with_body(r#"{"error":{"code":500,"message":"backend exploded"}}"#)
        .expect(1)
        .create_async()
        .await;

    let err = client_for(&server)
        .fetch_recommendation(&query())
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert_eq!(
        err,
        ServiceError::Status {
            status: 500,
            message: "backend exploded".to_string()
        }
    );
}

#[tokio::test]
async fn test_non_json_text_is_invalid() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", common::GENERATE_PATH)
        .with_status(200)
        .with_body(common::envelope("Here are five dreamy places for you!"))
        .create_async()
        .await;

    let err = client_for(&server)
        .fetch_recommendation(&query())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "invalid recommendation data");
}

#[tokio::test]
async fn test_unknown_flight_tier_is_invalid() {
    let mut server = mockito::Server::new_async().await;
    let mut payload = common::recommendation();
    payload["recommended_locations"][2]["flights"][1]["type"] = json!("FIRST_CLASS");
    let _mock = server
        .mock("POST", common::GENERATE_PATH)
        .with_status(200)
        .with_body(common::envelope(&payload.to_string()))
        .create_async()
        .await;

    let err = client_for(&server)
        .fetch_recommendation(&query())
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidRecommendation { .. }));
}

#[tokio::test]
async fn test_missing_hotel_is_invalid() {
    let mut server = mockito::Server::new_async().await;
    let mut payload = common::recommendation();
    payload["recommended_locations"][0]
        .as_object_mut()
        .unwrap()
        .remove("hotel");
    let _mock = server
        .mock("POST", common::GENERATE_PATH)
        .with_status(200)
        .with_body(common::envelope(&payload.to_string()))
        .create_async()
        .await;

    let err = client_for(&server)
        .fetch_recommendation(&query())
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidRecommendation { .. }));
    assert!(err.detail().is_some());
}

#[tokio::test]
async fn test_blocked_prompt_is_invalid() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", common::GENERATE_PATH)
        .with_status(200)
        .with_body(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .fetch_recommendation(&query())
        .await
        .unwrap_err();
    assert!(err.detail().unwrap().contains("SAFETY"));
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    let client = RecommendationClient::new(common::API_KEY)
        .with_base_url("http://127.0.0.1:9")
        .with_model(common::MODEL);

    let err = client.fetch_recommendation(&query()).await.unwrap_err();
    assert!(matches!(err, ServiceError::Transport(_)));
}

#[tokio::test]
async fn test_duplicate_ids_and_tiers_are_invalid() {
    let mut server = mockito::Server::new_async().await;
    let mut payload = common::recommendation();
    payload["recommended_locations"][1]["id"] = json!("loc-0");
    payload["recommended_locations"][1]["flights"][1]["type"] = json!("ECONOMY");
    let _mock = server
        .mock("POST", common::GENERATE_PATH)
        .with_status(200)
        .with_body(common::envelope(&payload.to_string()))
        .create_async()
        .await;

    let err = client_for(&server)
        .fetch_recommendation(&query())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "invalid recommendation data");
    assert!(err.detail().unwrap().contains("loc-0"));
}

#[tokio::test]
async fn test_counts_are_returned_as_received() {
    let mut server = mockito::Server::new_async().await;
    let mut payload = common::recommendation();
    payload["recommended_locations"]
        .as_array_mut()
        .unwrap()
        .truncate(4);
    payload["recommended_locations"][0]["attractions"]
        .as_array_mut()
        .unwrap()
        .truncate(2);
    let _mock = server
        .mock("POST", common::GENERATE_PATH)
        .with_status(200)
        .with_body(common::envelope(&payload.to_string()))
        .expect(1)
        .create_async()
        .await;

    let recommendation = client_for(&server)
        .fetch_recommendation(&query())
        .await
        .unwrap();

    assert_eq!(recommendation.destinations.len(), 4);
    let names: Vec<&str> = recommendation
        .destinations
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(names, ["Vik", "Lanzarote", "Cappadocia", "Atacama"]);

    let first = &recommendation.destinations[0];
    assert_eq!(first.attractions.len(), 2);
    assert_eq!(first.attractions[1].name, "Dyrhólaey");
    assert_eq!(first.attractions[1].category, "Viewpoint");
    assert_eq!(recommendation.destinations[1].attractions.len(), 3);

    let roundtrip = serde_json::to_value(&recommendation).unwrap();
    assert_eq!(roundtrip, payload);
}
