//! HTTP-level tests for the permission guard.
//!
//! Covers every header and token failure code, the 401/403 split, role
//! presets, and that guard failures are reported before path and body errors.

mod common;

use axum::http::StatusCode;
use casting_core::roles::Role;
use common::{
    body_json, build_test_app, delete_auth, expired_token, foreign_secret_token, get, get_auth,
    get_with_header, no_permissions_claim_token, patch_json_auth, post_json, post_json_auth,
    token_for, token_with, wrong_audience_token, wrong_issuer_token,
};
use serde_json::json;

/// Assert the error envelope for a guard rejection.
async fn assert_rejected(
    response: axum::http::Response<axum::body::Body>,
    status: StatusCode,
    code: &str,
    message: &str,
) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], status.as_u16());
    assert_eq!(json["code"], code);
    assert_eq!(json["message"], message);
}

// ---------------------------------------------------------------------------
// Header parsing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_header_is_401() {
    let (app, _) = build_test_app();
    let response = get(app, "/movies").await;
    assert_rejected(
        response,
        StatusCode::UNAUTHORIZED,
        "authorization_header_missing",
        "Authorization header is expected.",
    )
    .await;
}

#[tokio::test]
async fn non_bearer_scheme_is_401() {
    let (app, _) = build_test_app();
    let response = get_with_header(app, "/actors", "Token abc").await;
    assert_rejected(
        response,
        StatusCode::UNAUTHORIZED,
        "invalid_header",
        "Authorization header must start with \"Bearer\".",
    )
    .await;
}

#[tokio::test]
async fn bearer_without_token_is_401() {
    let (app, _) = build_test_app();
    let response = get_with_header(app, "/actors", "Bearer").await;
    assert_rejected(response, StatusCode::UNAUTHORIZED, "invalid_header", "Token not found.").await;
}

#[tokio::test]
async fn extra_header_parts_are_401() {
    let (app, _) = build_test_app();
    let response = get_with_header(app, "/actors", "Bearer a b").await;
    assert_rejected(
        response,
        StatusCode::UNAUTHORIZED,
        "invalid_header",
        "Authorization header must be bearer token.",
    )
    .await;
}

// ---------------------------------------------------------------------------
// Token validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn expired_token_is_401() {
    let (app, _) = build_test_app();
    let response = get_auth(app, "/movies", &expired_token()).await;
    assert_rejected(response, StatusCode::UNAUTHORIZED, "token_expired", "Token expired.").await;
}

#[tokio::test]
async fn wrong_audience_or_issuer_is_401() {
    let (app, _) = build_test_app();
    let expected = "Incorrect claims. Please, check the audience and issuer.";

    let response = get_auth(app.clone(), "/movies", &wrong_audience_token()).await;
    assert_rejected(response, StatusCode::UNAUTHORIZED, "invalid_claims", expected).await;

    let response = get_auth(app, "/movies", &wrong_issuer_token()).await;
    assert_rejected(response, StatusCode::UNAUTHORIZED, "invalid_claims", expected).await;
}

#[tokio::test]
async fn bad_signature_is_401() {
    let (app, _) = build_test_app();
    let response = get_auth(app.clone(), "/movies", &foreign_secret_token()).await;
    assert_rejected(
        response,
        StatusCode::UNAUTHORIZED,
        "invalid_token",
        "Unable to parse authentication token.",
    )
    .await;

    let response = get_auth(app, "/movies", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_without_permissions_claim_is_401() {
    let (app, _) = build_test_app();
    let response = get_auth(app, "/actors", &no_permissions_claim_token()).await;
    assert_rejected(
        response,
        StatusCode::UNAUTHORIZED,
        "invalid_claims",
        "Permissions not included in JWT.",
    )
    .await;
}

// ---------------------------------------------------------------------------
// Permissions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_permission_is_403() {
    let (app, _) = build_test_app();
    let token = token_with(&["get:actors"]);

    let response = get_auth(app, "/movies", &token).await;
    assert_rejected(response, StatusCode::FORBIDDEN, "unauthorized", "Permission not found.").await;
}

#[tokio::test]
async fn casting_assistant_can_read_but_not_write() {
    let (app, _) = build_test_app();
    let token = token_for(Role::CastingAssistant);

    let response = post_json_auth(
        app.clone(),
        "/actors",
        &token,
        json!({ "name": "Ana", "age": 30, "gender": "Female" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Reading is allowed; the listing is simply empty.
    let response = get_auth(app, "/actors", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn casting_director_cannot_create_or_delete_movies() {
    let (app, _) = build_test_app();
    let token = token_for(Role::CastingDirector);

    let response = post_json_auth(
        app.clone(),
        "/movies",
        &token,
        json!({ "title": "Dune", "release": "2024-01-01" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete_auth(app.clone(), "/movies/1", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = post_json_auth(
        app,
        "/actors",
        &token,
        json!({ "name": "Ana", "age": 30, "gender": "Female" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn executive_producer_has_every_permission() {
    let (app, _) = build_test_app();
    let token = token_for(Role::ExecutiveProducer);

    let response = post_json_auth(
        app.clone(),
        "/movies",
        &token,
        json!({ "title": "Dune", "release": "2024-01-01" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete_auth(app, "/movies/1", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[tokio::test]
async fn guard_runs_before_path_and_body_checks() {
    let (app, _) = build_test_app();

    // Unparseable id, no credentials: 401 rather than 400.
    let response = get(app.clone(), "/movies/not-a-number").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Bad body, no credentials: 401 rather than 400.
    let response = post_json(app.clone(), "/movies", json!({})).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Missing record, insufficient permission: 403 rather than 404.
    let token = token_with(&["get:actors"]);
    let response = patch_json_auth(app, "/actors/999", &token, json!({ "age": 3 })).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn public_routes_need_no_token() {
    let (app, _) = build_test_app();

    let response = get(app.clone(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Casting Agency Home Page");

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
}
