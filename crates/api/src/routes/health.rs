use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    success: bool,
    status: &'static str,
    version: &'static str,
    db_healthy: bool,
}

/// GET /health
///
/// Always `200`; `status` reads `degraded` when either store fails its ping.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let movies = state.movies.ping().await;
    let actors = state.actors.ping().await;

    let db_healthy = match movies.and(actors) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Health check: record store unreachable");
            false
        }
    };

    Json(HealthResponse {
        success: true,
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
