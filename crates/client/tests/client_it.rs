//! Integration tests for the API client against a mock backend.

use assert_matches::assert_matches;
use httpmock::prelude::*;

use gameverse_client::{ClientError, GameVerseClient};

// ---------------------------------------------------------------------------
// Test: typed deserialization of each endpoint
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_games_decodes_summaries() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/games")
                .query_param("query", "hollow");
            then.status(200).json_body(serde_json::json!([{
                "id": 1905,
                "name": "Hollow Knight",
                "genres": ["Platform"],
                "platforms": ["PC"],
                "release_timestamp": 1487894400,
                "summary": null,
                "cover_url": "//images.example/hk.jpg",
                "rating": 91.2,
                "rating_count": 1500
            }]));
        })
        .await;

    let client = GameVerseClient::new(server.base_url());
    let games = client.search_games("hollow", None, None).await.unwrap();

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].name, "Hollow Knight");
    assert_eq!(games[0].genres, vec!["Platform"]);
}

#[tokio::test]
async fn get_game_maps_404_to_none() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/games/7");
            then.status(404)
                .json_body(serde_json::json!({"error": "game with id 7 not found", "code": "NOT_FOUND"}));
        })
        .await;

    let client = GameVerseClient::new(server.base_url());
    let detail = client.get_game(7).await.unwrap();

    assert!(detail.is_none());
}

#[tokio::test]
async fn trivia_token_is_extracted() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/trivia/token");
            then.status(200)
                .json_body(serde_json::json!({"token": "session-abc"}));
        })
        .await;

    let client = GameVerseClient::new(server.base_url());
    let token = client.get_trivia_token().await.unwrap();

    assert_eq!(token, "session-abc");
}

#[tokio::test]
async fn submit_review_returns_the_ack_flag() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/reviews");
            then.status(200).json_body(serde_json::json!({"success": true}));
        })
        .await;

    let client = GameVerseClient::new(server.base_url());
    let success = client
        .submit_review(1905, "user-123", "A modern classic.")
        .await
        .unwrap();

    assert!(success);
}

// ---------------------------------------------------------------------------
// Test: error surfaces keep their kinds
// ---------------------------------------------------------------------------

#[tokio::test]
async fn server_errors_become_status_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/genres");
            then.status(503)
                .json_body(serde_json::json!({"error": "Game catalog is not configured"}));
        })
        .await;

    let client = GameVerseClient::new(server.base_url());
    let result = client.list_genres().await;

    assert_matches!(result, Err(ClientError::Status { status: 503 }));
}

#[tokio::test]
async fn malformed_json_becomes_a_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/platforms");
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let client = GameVerseClient::new(server.base_url());
    let result = client.list_platforms().await;

    assert_matches!(result, Err(ClientError::Decode(_)));
}

// ---------------------------------------------------------------------------
// Test: base URLs that already include /api compose correctly
// ---------------------------------------------------------------------------

#[tokio::test]
async fn base_url_with_api_prefix_is_not_doubled() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/genres");
            then.status(200).json_body(serde_json::json!([]));
        })
        .await;

    let client = GameVerseClient::new(format!("{}/api", server.base_url()));
    let genres = client.list_genres().await.unwrap();

    assert!(genres.is_empty());
    mock.assert_calls_async(1).await;
}
