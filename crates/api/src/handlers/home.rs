//! Unauthenticated endpoints outside the resource routes.

use axum::http::{Method, Uri};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::response::{Message, Success};

/// GET /
pub async fn index() -> Json<Success<Message>> {
    Json(Success::new(Message {
        message: "Casting Agency Home Page",
    }))
}

/// Fallback for unmatched paths: a JSON `404`.
pub async fn not_found(method: Method, uri: Uri) -> AppResult<()> {
    tracing::debug!(%method, path = %uri.path(), "No route matched");
    Err(AppError::NoRoute(format!("{method} {}", uri.path())))
}

/// Fallback for a known path hit with an unsupported method: a JSON `405`.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppResult<()> {
    Err(AppError::MethodNotAllowed(format!("{method} {}", uri.path())))
}
