//! HTTP-level tests for stage batch validation.
//!
//! Batches are checked entry by entry against the entries already
//! accepted, before any query runs, so the suite uses a lazy pool.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, lazy_pool, post_json, put_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: duplicate names within a batch are rejected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn batch_with_duplicate_names_returns_400() {
    let app = build_test_app(lazy_pool());
    let response = post_json(
        app,
        "/api/v1/events/1/stages",
        json!({
            "stages": [
                {"name": "CB-1"},
                {"name": "  CB-1  "}
            ]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let fields = json["fields"].as_array().expect("fields should be an array");
    assert!(
        fields
            .iter()
            .any(|f| f["field"] == "stages[1].name" && f["message"] == "Stage name already exists"),
        "expected a duplicate-name error, got: {fields:?}"
    );
}

// ---------------------------------------------------------------------------
// Test: duplicate codes collide only when both entries carry one
// ---------------------------------------------------------------------------

#[tokio::test]
async fn batch_with_duplicate_codes_returns_400() {
    let app = build_test_app(lazy_pool());
    let response = post_json(
        app,
        "/api/v1/events/1/stages",
        json!({
            "stages": [
                {"name": "First", "code": "cb-1"},
                {"name": "Second", "code": "cb-1"}
            ]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let fields = json["fields"].as_array().expect("fields should be an array");
    assert!(
        fields
            .iter()
            .any(|f| f["field"] == "stages[1].code" && f["message"] == "Stage code already exists"),
        "expected a duplicate-code error, got: {fields:?}"
    );
}

// ---------------------------------------------------------------------------
// Test: entries without a code never collide on code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn batch_with_absent_codes_does_not_collide() {
    let app = build_test_app(lazy_pool());
    // Two code-less entries plus a blank third name: the only error must be
    // the blank name, not a phantom code collision.
    let response = post_json(
        app,
        "/api/v1/events/1/stages",
        json!({
            "stages": [
                {"name": "First"},
                {"name": "Second", "code": "  "},
                {"name": "   "}
            ]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let fields = json["fields"].as_array().expect("fields should be an array");
    assert_eq!(fields.len(), 1, "expected only the blank name, got: {fields:?}");
    assert_eq!(fields[0]["field"], "stages[2].name");
    assert_eq!(fields[0]["message"], "Name is required");
}

// ---------------------------------------------------------------------------
// Test: every offending entry is reported at once
// ---------------------------------------------------------------------------

#[tokio::test]
async fn batch_reports_all_offending_entries() {
    let app = build_test_app(lazy_pool());
    let response = post_json(
        app,
        "/api/v1/events/1/stages",
        json!({
            "stages": [
                {"name": "Keep", "code": "k-1"},
                {"name": ""},
                {"name": "Keep"},
                {"name": "Other", "code": "k-1"}
            ]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let fields = json["fields"].as_array().expect("fields should be an array");
    assert_eq!(fields.len(), 3, "expected three errors, got: {fields:?}");
}

// ---------------------------------------------------------------------------
// Test: PUT /api/v1/stages/{id} rejects a blank name without a lookup
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_stage_with_blank_name_returns_400() {
    let app = build_test_app(lazy_pool());
    let response = put_json(app, "/api/v1/stages/1", json!({"name": "  "})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}
