//! Per-route permission guard.
//!
//! Each protected route is registered through [`guarded`], which attaches
//! [`require_permission`] as a route layer configured with that route's
//! permission string. Route layers run before the handler's extractors, so a
//! bad credential is reported ahead of any path, query, or body problem.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::{from_fn_with_state, Next};
use axum::response::Response;
use axum::routing::MethodRouter;
use casting_core::permissions::has_permission;

use super::auth::{bearer_token, AuthUser};
use crate::auth::jwt::{validate_token, JwtConfig};
use crate::auth::{AuthError, Claims};
use crate::config::ServerConfig;
use crate::error::AppError;
use crate::state::AppState;

/// State for one guarded route.
#[derive(Clone)]
pub struct PermissionGuard {
    pub config: Arc<ServerConfig>,
    pub permission: &'static str,
}

/// Check the request's bearer token and that it grants `required`.
pub fn authorize(
    headers: &HeaderMap,
    required: &'static str,
    jwt: &JwtConfig,
) -> Result<Claims, AuthError> {
    let token = bearer_token(headers)?;
    let claims = validate_token(token, jwt)?;
    if !has_permission(claims.permissions(), required) {
        return Err(AuthError::InsufficientPermission { required });
    }
    Ok(claims)
}

/// Middleware: reject the request unless it carries a token granting the
/// guard's permission. On success the caller is stored as an [`AuthUser`]
/// extension.
pub async fn require_permission(
    State(guard): State<PermissionGuard>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = authorize(request.headers(), guard.permission, &guard.config.jwt).map_err(|err| {
        tracing::warn!(
            method = %request.method(),
            path = %request.uri().path(),
            required = guard.permission,
            code = err.code(),
            "Request rejected by permission guard",
        );
        err
    })?;

    tracing::debug!(subject = %claims.sub, required = guard.permission, "Permission granted");
    request.extensions_mut().insert(AuthUser::from(claims));
    Ok(next.run(request).await)
}

/// Wrap a method route so it only runs for callers holding `permission`.
///
/// ```ignore
/// .route("/movies", guarded(get(movies::list), &state, GET_MOVIES))
/// ```
pub fn guarded(
    route: MethodRouter<AppState>,
    state: &AppState,
    permission: &'static str,
) -> MethodRouter<AppState> {
    let guard = PermissionGuard {
        config: Arc::clone(&state.config),
        permission,
    };
    route.route_layer(from_fn_with_state(guard, require_permission))
}
