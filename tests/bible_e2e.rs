//! End-to-end tests for bible endpoints
//!
//! Drives the real router through `tower::ServiceExt::oneshot`. No database
//! is needed: the services are stubs and the pool is never queried.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::util::ServiceExt;

use common::{assert_error, body_string, TestApp};

// ============================================================================
// POST /bible
// ============================================================================

#[tokio::test]
async fn test_create_bible_returns_placeholder() {
    let app = TestApp::new();

    let response = app.send_json(Method::POST, "/bible", &json!({})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_string(response).await, "This action adds a new bible");
}

#[tokio::test]
async fn test_create_bible_ignores_payload_fields() {
    let app = TestApp::new();

    let payload = json!({
        "book": "Genesis",
        "chapter": 1,
        "verses": [1, 2, 3],
        "translation": "KJV"
    });
    let response = app.send_json(Method::POST, "/bible", &payload).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_string(response).await, "This action adds a new bible");
}

#[tokio::test]
async fn test_create_bible_without_body() {
    let app = TestApp::new();

    let response = app.send(Method::POST, "/bible").await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_string(response).await, "This action adds a new bible");
}

#[tokio::test]
async fn test_create_bible_with_non_json_body() {
    let app = TestApp::new();

    let response = app
        .send_raw(Method::POST, "/bible", "text/plain", "not json at all")
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_string(response).await, "This action adds a new bible");
}

// ============================================================================
// GET /bible
// ============================================================================

#[tokio::test]
async fn test_find_all_bible_returns_placeholder() {
    let app = TestApp::new();

    let response = app.send(Method::GET, "/bible").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "This action returns all bible");
}

// ============================================================================
// GET /bible/:id
// ============================================================================

#[tokio::test]
async fn test_find_one_bible_echoes_id() {
    let app = TestApp::new();

    for id in [0_i64, 1, 42, 9_999_999] {
        let response = app.send(Method::GET, &format!("/bible/{id}")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert_eq!(body, format!("This action returns a #{id} bible"));
        assert!(body.contains(&id.to_string()));
    }
}

#[tokio::test]
async fn test_find_one_bible_non_numeric_id_returns_bad_request() {
    let app = TestApp::new();

    let response = app.send(Method::GET, "/bible/genesis").await;

    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_ID").await;
}

// ============================================================================
// PATCH /bible/:id
// ============================================================================

#[tokio::test]
async fn test_update_bible_echoes_id() {
    let app = TestApp::new();

    let response = app
        .send_json(Method::PATCH, "/bible/7", &json!({"book": "Exodus"}))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "This action updates a #7 bible");
}

#[tokio::test]
async fn test_update_bible_without_body() {
    let app = TestApp::new();

    let response = app.send(Method::PATCH, "/bible/7").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "This action updates a #7 bible");
}

#[tokio::test]
async fn test_update_bible_non_numeric_id_returns_bad_request() {
    let app = TestApp::new();

    let response = app.send_json(Method::PATCH, "/bible/abc", &json!({})).await;

    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_ID").await;
}

// ============================================================================
// DELETE /bible/:id
// ============================================================================

#[tokio::test]
async fn test_remove_bible_echoes_id() {
    let app = TestApp::new();

    let response = app.send(Method::DELETE, "/bible/13").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "This action removes a #13 bible");
}

#[tokio::test]
async fn test_remove_bible_non_numeric_id_returns_bad_request() {
    let app = TestApp::new();

    let response = app.send(Method::DELETE, "/bible/abc").await;

    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_ID").await;
}

// ============================================================================
// Request correlation
// ============================================================================

#[tokio::test]
async fn test_responses_carry_request_id_header() {
    let app = TestApp::new();

    let response = app.send(Method::GET, "/bible").await;

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_caller_request_id_is_echoed() {
    let app = TestApp::new();

    let response = app
        .router
        .clone()
        .oneshot(
            axum::http::Request::builder()
                .method(Method::GET)
                .uri("/bible")
                .header("x-request-id", "caller-supplied-id")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "caller-supplied-id"
    );
}
