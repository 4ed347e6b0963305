//! Bearer header parsing and the authenticated-caller extractor.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use crate::auth::{AuthError, Claims};
use crate::error::AppError;

const MUST_START_WITH_BEARER: &str = "Authorization header must start with \"Bearer\".";
const TOKEN_NOT_FOUND: &str = "Token not found.";
const MUST_BE_BEARER_TOKEN: &str = "Authorization header must be bearer token.";

/// Pull the token out of an `Authorization: Bearer <token>` header.
///
/// The header must split on single spaces into exactly two parts, the first
/// of which is literally `Bearer`.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers.get(AUTHORIZATION).ok_or(AuthError::MissingHeader)?;
    let value = value
        .to_str()
        .map_err(|_| AuthError::MalformedHeader(MUST_BE_BEARER_TOKEN))?;

    let parts: Vec<&str> = value.split(' ').collect();
    match parts.as_slice() {
        [scheme, ..] if *scheme != "Bearer" => Err(AuthError::MalformedHeader(MUST_START_WITH_BEARER)),
        [_] | [_, ""] => Err(AuthError::MalformedHeader(TOKEN_NOT_FOUND)),
        [_, token] => Ok(token),
        _ => Err(AuthError::MalformedHeader(MUST_BE_BEARER_TOKEN)),
    }
}

/// The caller of a guarded route.
///
/// Only available behind [`require_permission`](super::permission::require_permission);
/// use it as an extractor parameter to log who made a change:
///
/// ```ignore
/// async fn my_handler(caller: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(subject = %caller.subject, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The `sub` claim, empty when the token carries none.
    pub subject: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            subject: claims.sub,
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<AuthUser>().cloned().ok_or_else(|| {
            AppError::InternalError("AuthUser requested on a route without a permission guard".into())
        })
    }
}
