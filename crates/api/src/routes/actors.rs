//! Route definitions for actors.

use axum::routing::{delete, get, patch, post};
use axum::Router;
use casting_core::permissions::{DELETE_ACTORS, GET_ACTORS, PATCH_ACTORS, POST_ACTORS};

use crate::handlers::actors;
use crate::middleware::permission::guarded;
use crate::state::AppState;

/// ```text
/// GET    /actors          -> list        (get:actors)
/// POST   /actors          -> create      (post:actors)
/// GET    /actors/{id}     -> get_by_id   (get:actors)
/// PATCH  /actors/{id}     -> update      (patch:actors)
/// DELETE /actors/{id}     -> delete      (delete:actors)
/// ```
pub fn router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/actors",
            guarded(get(actors::list), state, GET_ACTORS)
                .merge(guarded(post(actors::create), state, POST_ACTORS)),
        )
        .route(
            "/actors/{id}",
            guarded(get(actors::get_by_id), state, GET_ACTORS)
                .merge(guarded(patch(actors::update), state, PATCH_ACTORS))
                .merge(guarded(delete(actors::delete), state, DELETE_ACTORS)),
        )
}
