use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use casting_core::error::CoreError;
use casting_db::store::StoreError;
use serde::Serialize;

use crate::auth::AuthError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`], [`AuthError`] and [`StoreError`] and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce the error envelope
/// `{success: false, error: <status>, code, message}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `casting_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The permission guard rejected the request.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A record store call failed. Always surfaces as `422`.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A malformed request: unparseable body, query, or path.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No route matched the request path.
    #[error("No route for {0}")]
    NoRoute(String),

    /// The path exists but not for this method.
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    code: &'static str,
    message: String,
}

const INTERNAL_MESSAGE: &str = "internal server error";

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } | CoreError::EmptyPage { .. } => {
                    (StatusCode::NOT_FOUND, "not_found", "resource not found".into())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "bad_request", format!("bad request: {msg}"))
                }
            },

            AppError::Auth(auth) => (auth.status(), auth.code(), auth.to_string()),

            AppError::Store(err) => {
                tracing::error!(error = %err, "Record store failure");
                (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable", "unprocessable".into())
            }

            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", format!("bad request: {msg}"))
            }

            AppError::NoRoute(_) => {
                (StatusCode::NOT_FOUND, "not_found", "resource not found".into())
            }

            AppError::MethodNotAllowed(_) => (
                StatusCode::METHOD_NOT_ALLOWED,
                "method_not_allowed",
                "method not allowed".into(),
            ),

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", INTERNAL_MESSAGE.into())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            code,
            message,
        };
        (status, axum::Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Build the JSON `500` returned when a handler panics.
///
/// Used by the catch-panic layer; the panic payload is logged, never sent.
pub fn panic_response(payload: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::InternalError(format!("handler panicked: {detail}")).into_response()
}
