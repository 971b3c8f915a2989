//! Integration tests for review submission (acknowledge-only endpoint).

mod common;

use axum::http::StatusCode;
use common::{body_json, build_offline_test_app, post_json};

// ---------------------------------------------------------------------------
// Test: a complete submission is acknowledged
// ---------------------------------------------------------------------------

#[tokio::test]
async fn complete_submission_is_acknowledged() {
    let app = build_offline_test_app();
    let response = post_json(
        app,
        "/api/reviews",
        serde_json::json!({
            "game_id": 1905,
            "user_id": "user-123",
            "review": "A modern classic."
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);
}

// ---------------------------------------------------------------------------
// Test: each missing field is rejected with 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_game_id_is_rejected() {
    let app = build_offline_test_app();
    let response = post_json(
        app,
        "/api/reviews",
        serde_json::json!({"user_id": "user-123", "review": "Great"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn missing_user_id_is_rejected() {
    let app = build_offline_test_app();
    let response = post_json(
        app,
        "/api/reviews",
        serde_json::json!({"game_id": 1905, "review": "Great"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn blank_review_is_rejected() {
    let app = build_offline_test_app();
    let response = post_json(
        app,
        "/api/reviews",
        serde_json::json!({"game_id": 1905, "user_id": "user-123", "review": "   "}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
