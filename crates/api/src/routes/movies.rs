//! Route definitions for movies.

use axum::routing::{delete, get, patch, post};
use axum::Router;
use casting_core::permissions::{DELETE_MOVIES, GET_MOVIES, PATCH_MOVIES, POST_MOVIES};

use crate::handlers::movies;
use crate::middleware::permission::guarded;
use crate::state::AppState;

/// Movie routes.
///
/// ```text
/// GET    /movies          -> list        (get:movies)
/// POST   /movies          -> create      (post:movies)
/// GET    /movies/{id}     -> get_by_id   (get:movies)
/// PATCH  /movies/{id}     -> update      (patch:movies)
/// DELETE /movies/{id}     -> delete      (delete:movies)
/// ```
pub fn router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/movies",
            guarded(get(movies::list), state, GET_MOVIES)
                .merge(guarded(post(movies::create), state, POST_MOVIES)),
        )
        .route(
            "/movies/{id}",
            guarded(get(movies::get_by_id), state, GET_MOVIES)
                .merge(guarded(patch(movies::update), state, PATCH_MOVIES))
                .merge(guarded(delete(movies::delete), state, DELETE_MOVIES)),
        )
}
