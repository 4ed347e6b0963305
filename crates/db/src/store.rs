//! Record store traits.
//!
//! Handlers never reach for a global connection; they receive a store through
//! application state. Every mutating method runs as one unit that either
//! commits completely or leaves the table unchanged.

use async_trait::async_trait;
use casting_core::pagination::{Page, PageRequest};
use casting_core::types::DbId;

use crate::models::actor::{Actor, CreateActor, UpdateActor};
use crate::models::movie::{CreateMovie, Movie, UpdateMovie};

/// A failed persistence call.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Driver or connection failure, or any database error that is not a
    /// constraint violation.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The write violated a column or table constraint.
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// A writer panicked while holding the in-memory table lock.
    #[error("record store lock poisoned")]
    Poisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence for the `movies` table.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// One page of movies ordered by title, plus the total movie count.
    async fn list(&self, page: PageRequest) -> StoreResult<Page<Movie>>;

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Movie>>;

    async fn create(&self, input: &CreateMovie) -> StoreResult<Movie>;

    /// Apply a partial update. `None` if the movie does not exist.
    async fn update(&self, id: DbId, input: &UpdateMovie) -> StoreResult<Option<Movie>>;

    /// `false` if the movie does not exist.
    async fn delete(&self, id: DbId) -> StoreResult<bool>;

    /// Confirm the backing storage is reachable.
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

/// Persistence for the `actors` table.
#[async_trait]
pub trait ActorStore: Send + Sync {
    /// One page of actors ordered by name, plus the total actor count.
    async fn list(&self, page: PageRequest) -> StoreResult<Page<Actor>>;

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Actor>>;

    async fn create(&self, input: &CreateActor) -> StoreResult<Actor>;

    /// Apply a partial update. `None` if the actor does not exist.
    async fn update(&self, id: DbId, input: &UpdateActor) -> StoreResult<Option<Actor>>;

    /// `false` if the actor does not exist.
    async fn delete(&self, id: DbId) -> StoreResult<bool>;

    /// Confirm the backing storage is reachable.
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
