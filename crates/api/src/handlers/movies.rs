//! Handlers for `/movies`.
//!
//! Every handler sits behind the permission guard; see `routes::movies` for
//! which permission each one requires.

use axum::extract::State;
use axum::Json;
use casting_core::error::CoreError;
use casting_core::types::DbId;

use crate::error::AppResult;
use crate::extract::{IdPath, JsonBody, PageQuery};
use crate::middleware::auth::AuthUser;
use crate::query::PageParams;
use crate::response::{Deleted, MovieBody, MovieList, Success};
use crate::schemas::{MoviePatchBody, NewMovieBody};
use crate::state::AppState;

/// GET /movies?page=N
///
/// One page of movies ordered by title. An empty page is a `404`.
pub async fn list(
    State(state): State<AppState>,
    PageQuery(params): PageQuery<PageParams>,
) -> AppResult<Json<Success<MovieList>>> {
    let page = params.page_request();
    let listing = state.movies.list(page).await?;

    if listing.is_empty() {
        return Err(CoreError::EmptyPage {
            entity: "movies",
            page: page.page(),
        }
        .into());
    }

    Ok(Json(Success::new(MovieList {
        movies: listing.items,
        total_movies: listing.total,
    })))
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<Success<MovieBody>>> {
    let movie = state
        .movies
        .find_by_id(id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Movie", id })?;

    Ok(Json(Success::new(MovieBody { movie })))
}

/// POST /movies
pub async fn create(
    caller: AuthUser,
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewMovieBody>,
) -> AppResult<Json<Success<MovieBody>>> {
    let input = body.validate()?;
    let movie = state.movies.create(&input).await?;

    tracing::info!(movie_id = movie.id, subject = %caller.subject, "Movie created");

    Ok(Json(Success::new(MovieBody { movie })))
}

/// PATCH /movies/{id}
///
/// The body is validated before the lookup, so an empty patch is a `400`
/// whether or not the movie exists.
pub async fn update(
    caller: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    JsonBody(body): JsonBody<MoviePatchBody>,
) -> AppResult<Json<Success<MovieBody>>> {
    let input = body.validate()?;
    let movie = state
        .movies
        .update(id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Movie", id })?;

    tracing::info!(movie_id = id, subject = %caller.subject, "Movie updated");

    Ok(Json(Success::new(MovieBody { movie })))
}

/// DELETE /movies/{id}
pub async fn delete(
    caller: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<Success<Deleted>>> {
    if !state.movies.delete(id).await? {
        return Err(CoreError::NotFound { entity: "Movie", id }.into());
    }

    tracing::info!(movie_id = id, subject = %caller.subject, "Movie deleted");

    Ok(Json(Success::new(Deleted { deleted: id })))
}
