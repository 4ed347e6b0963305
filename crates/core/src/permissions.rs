//! Permission strings checked by the authorization guard.
//!
//! A permission is a `verb:resource` token. Every protected route declares
//! exactly one of these, and a bearer token must carry it in its
//! `permissions` claim.

pub const GET_ACTORS: &str = "get:actors";
pub const POST_ACTORS: &str = "post:actors";
pub const PATCH_ACTORS: &str = "patch:actors";
pub const DELETE_ACTORS: &str = "delete:actors";

pub const GET_MOVIES: &str = "get:movies";
pub const POST_MOVIES: &str = "post:movies";
pub const PATCH_MOVIES: &str = "patch:movies";
pub const DELETE_MOVIES: &str = "delete:movies";

/// Every permission a route can require.
pub const ALL: [&str; 8] = [
    GET_ACTORS,
    POST_ACTORS,
    PATCH_ACTORS,
    DELETE_ACTORS,
    GET_MOVIES,
    POST_MOVIES,
    PATCH_MOVIES,
    DELETE_MOVIES,
];

/// Returns `true` if `granted` contains `required`. Matching is exact.
pub fn has_permission<S: AsRef<str>>(granted: &[S], required: &str) -> bool {
    granted.iter().any(|p| p.as_ref() == required)
}

/// Returns `true` if some route requires `permission`.
pub fn is_known(permission: &str) -> bool {
    ALL.contains(&permission)
}
