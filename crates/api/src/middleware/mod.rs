//! Authorization middleware and the extractor handlers use to read its result.
//!
//! - [`permission::require_permission`] -- per-route guard checking one permission string.
//! - [`auth::AuthUser`] -- the verified caller, placed in request extensions by the guard.

pub mod auth;
pub mod permission;
