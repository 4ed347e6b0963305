//! Handlers for `/actors`.
//!
//! Every handler sits behind the permission guard; see `routes::actors` for
//! which permission each one requires.

use axum::extract::State;
use axum::Json;
use casting_core::error::CoreError;
use casting_core::types::DbId;

use crate::error::AppResult;
use crate::extract::{IdPath, JsonBody, PageQuery};
use crate::middleware::auth::AuthUser;
use crate::query::PageParams;
use crate::response::{ActorBody, ActorList, Deleted, Success};
use crate::schemas::{ActorPatchBody, NewActorBody};
use crate::state::AppState;

/// GET /actors?page=N
///
/// One page of actors ordered by name. An empty page is a `404`.
pub async fn list(
    State(state): State<AppState>,
    PageQuery(params): PageQuery<PageParams>,
) -> AppResult<Json<Success<ActorList>>> {
    let page = params.page_request();
    let listing = state.actors.list(page).await?;

    if listing.is_empty() {
        return Err(CoreError::EmptyPage {
            entity: "actors",
            page: page.page(),
        }
        .into());
    }

    Ok(Json(Success::new(ActorList {
        actors: listing.items,
        total_actors: listing.total,
    })))
}

/// GET /actors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<Success<ActorBody>>> {
    let actor = state
        .actors
        .find_by_id(id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Actor", id })?;

    Ok(Json(Success::new(ActorBody { actor })))
}

/// POST /actors
pub async fn create(
    caller: AuthUser,
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewActorBody>,
) -> AppResult<Json<Success<ActorBody>>> {
    let input = body.validate()?;
    let actor = state.actors.create(&input).await?;

    tracing::info!(actor_id = actor.id, name = %actor.name, subject = %caller.subject, "Actor created");

    Ok(Json(Success::new(ActorBody { actor })))
}

/// PATCH /actors/{id}
///
/// The body is validated before the lookup, so an empty patch is a `400`
/// whether or not the actor exists.
pub async fn update(
    caller: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
    JsonBody(body): JsonBody<ActorPatchBody>,
) -> AppResult<Json<Success<ActorBody>>> {
    let input = body.validate()?;
    let actor = state
        .actors
        .update(id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Actor", id })?;

    tracing::info!(actor_id = id, subject = %caller.subject, "Actor updated");

    Ok(Json(Success::new(ActorBody { actor })))
}

/// DELETE /actors/{id}
pub async fn delete(
    caller: AuthUser,
    State(state): State<AppState>,
    IdPath(id): IdPath<DbId>,
) -> AppResult<Json<Success<Deleted>>> {
    if !state.actors.delete(id).await? {
        return Err(CoreError::NotFound { entity: "Actor", id }.into());
    }

    tracing::info!(actor_id = id, subject = %caller.subject, "Actor deleted");

    Ok(Json(Success::new(Deleted { deleted: id })))
}
