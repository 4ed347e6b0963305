//! Shared response envelope types for API handlers.
//!
//! Every success body carries `"success": true` next to the payload fields.
//! Use [`Success`] instead of ad-hoc `serde_json::json!` so the payload shape
//! is checked at compile time.

use casting_core::types::DbId;
use casting_db::models::actor::Actor;
use casting_db::models::movie::Movie;
use serde::Serialize;

/// Standard `{ "success": true, ...T }` response envelope.
///
/// The payload's fields are flattened into the top-level object.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Success::new(MovieBody { movie })))
/// ```
#[derive(Debug, Serialize)]
pub struct Success<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> Success<T> {
    pub fn new(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MovieList {
    pub movies: Vec<Movie>,
    pub total_movies: u64,
}

#[derive(Debug, Serialize)]
pub struct MovieBody {
    pub movie: Movie,
}

#[derive(Debug, Serialize)]
pub struct ActorList {
    pub actors: Vec<Actor>,
    pub total_actors: u64,
}

#[derive(Debug, Serialize)]
pub struct ActorBody {
    pub actor: Actor,
}

/// `{deleted: id}` after a successful delete.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub deleted: DbId,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}
