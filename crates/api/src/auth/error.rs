//! Authorization guard failures.

use axum::http::StatusCode;

/// Why the authorization guard rejected a request.
///
/// The `Display` output is the human-readable description sent to clients;
/// [`AuthError::code`] is the machine-readable counterpart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No `Authorization` header on the request.
    #[error("Authorization header is expected.")]
    MissingHeader,

    /// The header is not exactly `Bearer <token>`.
    #[error("{0}")]
    MalformedHeader(&'static str),

    /// Signature, expiry, issuer, audience, or claim shape check failed.
    #[error("{description}")]
    InvalidToken {
        code: &'static str,
        description: &'static str,
    },

    /// The token is valid but lacks the permission the route requires.
    #[error("Permission not found.")]
    InsufficientPermission { required: &'static str },
}

impl AuthError {
    pub(crate) fn token_expired() -> Self {
        AuthError::InvalidToken {
            code: "token_expired",
            description: "Token expired.",
        }
    }

    pub(crate) fn invalid_claims(description: &'static str) -> Self {
        AuthError::InvalidToken {
            code: "invalid_claims",
            description,
        }
    }

    pub(crate) fn unparseable() -> Self {
        AuthError::InvalidToken {
            code: "invalid_token",
            description: "Unable to parse authentication token.",
        }
    }

    /// `401` for credential problems, `403` for a missing permission.
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::InsufficientPermission { .. } => StatusCode::FORBIDDEN,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingHeader => "authorization_header_missing",
            AuthError::MalformedHeader(_) => "invalid_header",
            AuthError::InvalidToken { code, .. } => *code,
            AuthError::InsufficientPermission { .. } => "unauthorized",
        }
    }
}
