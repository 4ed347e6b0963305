//! Record storage for movies and actors.
//!
//! - [`models`] -- row structs and typed create/update inputs.
//! - [`repositories`] -- SQL for each table, one zero-sized repo per entity.
//! - [`store`] -- the [`MovieStore`](store::MovieStore) / [`ActorStore`](store::ActorStore)
//!   traits handlers are written against.
//! - [`postgres`] -- transactional PostgreSQL implementation of the store traits.
//! - [`memory`] -- in-process implementation used by tests and local runs.

use sqlx::postgres::PgPoolOptions;

pub mod memory;
pub mod models;
pub mod postgres;
pub mod repositories;
pub mod store;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
