//! HTTP-level tests for operator roster validation.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, lazy_pool, post_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: rarity outside 1..=6 is rejected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_operator_with_rarity_out_of_range_returns_400() {
    let app = build_test_app(lazy_pool());
    let response = post_json(
        app,
        "/api/v1/operators",
        json!({"name": "Ifrit", "rarity": 7}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let fields = json["fields"].as_array().expect("fields should be an array");
    assert!(
        fields
            .iter()
            .any(|f| f["field"] == "rarity" && f["message"] == "Rarity must be between 1 and 6"),
        "expected a rarity error, got: {fields:?}"
    );
}

// ---------------------------------------------------------------------------
// Test: blank name and zero rarity are reported together
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_operator_accumulates_errors() {
    let app = build_test_app(lazy_pool());
    let response = post_json(app, "/api/v1/operators", json!({"name": " ", "rarity": 0})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let fields = json["fields"].as_array().expect("fields should be an array");
    assert_eq!(fields.len(), 2, "expected name + rarity errors, got: {fields:?}");
}
