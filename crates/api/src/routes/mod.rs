pub mod actors;
pub mod health;
pub mod movies;

use axum::routing::get;
use axum::Router;

use crate::handlers::home;
use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                     home page (public)
///
/// /movies               list, create
/// /movies/{id}          get, update, delete
///
/// /actors               list, create
/// /actors/{id}          get, update, delete
/// ```
///
/// Every resource route carries its own permission guard, so the state is
/// needed here to hand the guard its JWT settings.
pub fn api_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .merge(movies::router(state))
        .merge(actors::router(state))
}
