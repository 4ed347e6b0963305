//! PostgreSQL implementation of the record store traits.
//!
//! Each method opens its own transaction on the shared pool, runs the
//! repository statements inside it, and commits. Dropping the transaction on
//! an early `?` return rolls it back.

use async_trait::async_trait;
use casting_core::pagination::{Page, PageRequest};
use casting_core::types::DbId;

use crate::models::actor::{Actor, CreateActor, UpdateActor};
use crate::models::movie::{CreateMovie, Movie, UpdateMovie};
use crate::repositories::{ActorRepo, MovieRepo};
use crate::store::{ActorStore, MovieStore, StoreError, StoreResult};
use crate::DbPool;

/// PostgreSQL SQLSTATE class for integrity constraint violations.
const INTEGRITY_CONSTRAINT_CLASS: &str = "23";

/// Sort a sqlx error into a constraint violation or a general database error.
fn classify(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        let is_constraint = db_err
            .code()
            .is_some_and(|code| code.starts_with(INTEGRITY_CONSTRAINT_CLASS));
        if is_constraint {
            let constraint = db_err.constraint().unwrap_or("unknown");
            return StoreError::Constraint(format!("{constraint}: {}", db_err.message()));
        }
    }
    StoreError::Database(err)
}

/// Convert a page window to the `LIMIT`/`OFFSET` pair PostgreSQL expects.
fn window(page: PageRequest) -> (i64, i64) {
    let limit = i64::try_from(page.limit()).unwrap_or(i64::MAX);
    let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);
    (limit, offset)
}

/// Open a read-only transaction whose statements all see one snapshot, so a
/// page and its total count agree.
async fn begin_snapshot(
    pool: &DbPool,
) -> Result<sqlx::Transaction<'static, sqlx::Postgres>, sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
        .execute(&mut *tx)
        .await?;
    Ok(tx)
}

/// Movie store backed by the `movies` table.
#[derive(Clone)]
pub struct PgMovieStore {
    pool: DbPool,
}

impl PgMovieStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieStore for PgMovieStore {
    async fn list(&self, page: PageRequest) -> StoreResult<Page<Movie>> {
        let (limit, offset) = window(page);
        let mut tx = begin_snapshot(&self.pool).await?;
        let total = MovieRepo::count(&mut tx).await?;
        let items = MovieRepo::list_window(&mut tx, limit, offset).await?;
        tx.commit().await?;
        Ok(Page {
            items,
            total: u64::try_from(total).unwrap_or_default(),
        })
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Movie>> {
        let mut conn = self.pool.acquire().await?;
        Ok(MovieRepo::find_by_id(&mut conn, id).await?)
    }

    async fn create(&self, input: &CreateMovie) -> StoreResult<Movie> {
        let mut tx = self.pool.begin().await?;
        let movie = MovieRepo::create(&mut tx, input).await.map_err(classify)?;
        tx.commit().await?;
        tracing::debug!(movie_id = movie.id, "Movie row inserted");
        Ok(movie)
    }

    async fn update(&self, id: DbId, input: &UpdateMovie) -> StoreResult<Option<Movie>> {
        let mut tx = self.pool.begin().await?;
        let movie = MovieRepo::update(&mut tx, id, input)
            .await
            .map_err(classify)?;
        tx.commit().await?;
        Ok(movie)
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        let mut tx = self.pool.begin().await?;
        let deleted = MovieRepo::delete(&mut tx, id).await.map_err(classify)?;
        tx.commit().await?;
        Ok(deleted)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}

/// Actor store backed by the `actors` table.
#[derive(Clone)]
pub struct PgActorStore {
    pool: DbPool,
}

impl PgActorStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActorStore for PgActorStore {
    async fn list(&self, page: PageRequest) -> StoreResult<Page<Actor>> {
        let (limit, offset) = window(page);
        let mut tx = begin_snapshot(&self.pool).await?;
        let total = ActorRepo::count(&mut tx).await?;
        let items = ActorRepo::list_window(&mut tx, limit, offset).await?;
        tx.commit().await?;
        Ok(Page {
            items,
            total: u64::try_from(total).unwrap_or_default(),
        })
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Actor>> {
        let mut conn = self.pool.acquire().await?;
        Ok(ActorRepo::find_by_id(&mut conn, id).await?)
    }

    async fn create(&self, input: &CreateActor) -> StoreResult<Actor> {
        let mut tx = self.pool.begin().await?;
        let actor = ActorRepo::create(&mut tx, input).await.map_err(classify)?;
        tx.commit().await?;
        tracing::debug!(actor_id = actor.id, "Actor row inserted");
        Ok(actor)
    }

    async fn update(&self, id: DbId, input: &UpdateActor) -> StoreResult<Option<Actor>> {
        let mut tx = self.pool.begin().await?;
        let actor = ActorRepo::update(&mut tx, id, input)
            .await
            .map_err(classify)?;
        tx.commit().await?;
        Ok(actor)
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        let mut tx = self.pool.begin().await?;
        let deleted = ActorRepo::delete(&mut tx, id).await.map_err(classify)?;
        tx.commit().await?;
        Ok(deleted)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_window_maps_to_limit_and_offset() {
        assert_eq!(window(PageRequest::new(1)), (10, 0));
        assert_eq!(window(PageRequest::new(4)), (10, 30));
        assert_eq!(window(PageRequest::new(0)), (0, 0));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn listing_transaction_is_a_read_only_snapshot(pool: sqlx::PgPool) {
        let mut tx = begin_snapshot(&pool).await.unwrap();

        let (isolation,): (String,) = sqlx::query_as("SHOW transaction_isolation")
            .fetch_one(&mut *tx)
            .await
            .unwrap();
        assert_eq!(isolation, "repeatable read");

        let (read_only,): (String,) = sqlx::query_as("SHOW transaction_read_only")
            .fetch_one(&mut *tx)
            .await
            .unwrap();
        assert_eq!(read_only, "on");
    }
}
