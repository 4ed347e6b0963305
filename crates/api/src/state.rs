use std::sync::Arc;

use casting_db::memory::{InMemoryActorStore, InMemoryMovieStore};
use casting_db::postgres::{PgActorStore, PgMovieStore};
use casting_db::store::{ActorStore, MovieStore};
use casting_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (read by the permission guard).
    pub config: Arc<ServerConfig>,
    pub movies: Arc<dyn MovieStore>,
    pub actors: Arc<dyn ActorStore>,
}

impl AppState {
    /// State backed by PostgreSQL through the given pool.
    pub fn postgres(pool: DbPool, config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            movies: Arc::new(PgMovieStore::new(pool.clone())),
            actors: Arc::new(PgActorStore::new(pool)),
        }
    }

    /// State backed by empty in-process tables.
    pub fn in_memory(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            movies: Arc::new(InMemoryMovieStore::new()),
            actors: Arc::new(InMemoryActorStore::new()),
        }
    }
}
