//! Authentication and authorization primitives.
//!
//! - [`jwt`] -- bearer token validation, plus HS256 signing for local tokens.
//! - [`error`] -- the [`AuthError`] taxonomy the permission guard reports.

pub mod error;
pub mod jwt;

pub use error::AuthError;
pub use jwt::{Claims, JwtConfig};
