#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use casting_api::auth::jwt::{issue_token, sign, Audience, Claims, JwtConfig, VerificationKey};
use casting_api::config::{CorsOrigins, ServerConfig};
use casting_api::router::build_app_router;
use casting_api::state::AppState;
use casting_core::roles::Role;

pub const TEST_SECRET: &str = "integration-test-secret-0123456789";
pub const TEST_ISSUER: &str = "https://casting.test/";
pub const TEST_AUDIENCE: &str = "casting";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        issuer: TEST_ISSUER.to_string(),
        audience: TEST_AUDIENCE.to_string(),
        key: VerificationKey::Hs256 {
            secret: TEST_SECRET.to_string(),
        },
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: [127, 0, 0, 1].into(),
        port: 0,
        cors_origins: CorsOrigins::Any,
        request_timeout_secs: 30,
        jwt: test_jwt_config(),
    }
}

/// Build the full application router over empty in-memory stores.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack. The returned state shares the stores, for
/// seeding and inspecting rows directly.
pub fn build_test_app() -> (Router, AppState) {
    let config = test_config();
    let state = AppState::in_memory(config.clone());
    (build_app_router(state.clone(), &config), state)
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

pub fn token_with(permissions: &[&str]) -> String {
    issue_token("auth0|tester", permissions, chrono::Duration::minutes(10), &test_jwt_config())
        .expect("token generation should succeed")
}

pub fn token_for(role: Role) -> String {
    token_with(role.permissions())
}

fn base_claims() -> Claims {
    let now = chrono::Utc::now().timestamp();
    Claims {
        sub: "auth0|tester".to_string(),
        iss: TEST_ISSUER.to_string(),
        aud: Audience::One(TEST_AUDIENCE.to_string()),
        exp: now + 600,
        iat: Some(now),
        jti: None,
        permissions: Some(Role::ExecutiveProducer.permissions().iter().map(|p| p.to_string()).collect()),
    }
}

/// A token that expired well outside the validation leeway.
pub fn expired_token() -> String {
    let mut claims = base_claims();
    claims.exp = chrono::Utc::now().timestamp() - 3600;
    sign(&claims, &test_jwt_config()).unwrap()
}

pub fn wrong_audience_token() -> String {
    let mut claims = base_claims();
    claims.aud = Audience::One("another-api".to_string());
    sign(&claims, &test_jwt_config()).unwrap()
}

pub fn wrong_issuer_token() -> String {
    let mut claims = base_claims();
    claims.iss = "https://impostor.test/".to_string();
    sign(&claims, &test_jwt_config()).unwrap()
}

pub fn no_permissions_claim_token() -> String {
    let mut claims = base_claims();
    claims.permissions = None;
    sign(&claims, &test_jwt_config()).unwrap()
}

pub fn foreign_secret_token() -> String {
    let config = JwtConfig {
        key: VerificationKey::Hs256 {
            secret: "some-other-secret".to_string(),
        },
        ..test_jwt_config()
    };
    sign(&base_claims(), &config).unwrap()
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn builder(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match token {
        Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {token}")),
        None => builder,
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, builder(Method::GET, uri, None).body(Body::empty()).unwrap()).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, builder(Method::GET, uri, Some(token)).body(Body::empty()).unwrap()).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, builder(Method::DELETE, uri, Some(token)).body(Body::empty()).unwrap()).await
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    let request = builder(method, uri, token)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, None, body).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send_json(app, Method::POST, uri, Some(token), body).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send_json(app, Method::PATCH, uri, Some(token), body).await
}

/// Send a request with a raw `Authorization` header value.
pub async fn get_with_header(app: Router, uri: &str, authorization: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, authorization)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
