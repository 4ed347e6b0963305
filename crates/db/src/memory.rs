//! In-memory implementation of the record store traits.
//!
//! Intended for tests and local runs without PostgreSQL. Tables live behind a
//! `RwLock`; each write checks the same constraints the SQL schema declares
//! and either applies fully or not at all.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use casting_core::pagination::{paginate, Page, PageRequest};
use casting_core::types::DbId;

use crate::models::actor::{Actor, CreateActor, UpdateActor, NAME_MAX_LEN};
use crate::models::movie::{CreateMovie, Movie, UpdateMovie, TITLE_MAX_LEN};
use crate::store::{ActorStore, MovieStore, StoreError, StoreResult};

/// Rows keyed by id, plus the last id handed out. Ids are never reused.
#[derive(Debug)]
struct Table<T> {
    last_id: DbId,
    rows: BTreeMap<DbId, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            last_id: 0,
            rows: BTreeMap::new(),
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> DbId {
        self.last_id += 1;
        self.last_id
    }
}

fn check_text(column: &str, value: &str, max_len: Option<usize>) -> StoreResult<()> {
    if value.trim().is_empty() {
        return Err(StoreError::Constraint(format!("{column} must not be empty")));
    }
    if let Some(max) = max_len {
        if value.chars().count() > max {
            return Err(StoreError::Constraint(format!(
                "{column} exceeds {max} characters"
            )));
        }
    }
    Ok(())
}

fn check_movie(movie: &Movie) -> StoreResult<()> {
    check_text("movies.title", &movie.title, Some(TITLE_MAX_LEN))
}

fn check_actor(actor: &Actor) -> StoreResult<()> {
    check_text("actors.name", &actor.name, Some(NAME_MAX_LEN))?;
    check_text("actors.gender", &actor.gender, None)?;
    if actor.age <= 0 {
        return Err(StoreError::Constraint("actors.age must be positive".into()));
    }
    Ok(())
}

/// Movie store holding rows in process memory.
#[derive(Debug, Default)]
pub struct InMemoryMovieStore {
    table: RwLock<Table<Movie>>,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn list(&self, page: PageRequest) -> StoreResult<Page<Movie>> {
        let table = self.table.read().map_err(|_| StoreError::Poisoned)?;
        let mut ordered: Vec<&Movie> = table.rows.values().collect();
        ordered.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
        Ok(Page {
            items: paginate(&ordered, page).iter().map(|m| (*m).clone()).collect(),
            total: ordered.len() as u64,
        })
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Movie>> {
        let table = self.table.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, input: &CreateMovie) -> StoreResult<Movie> {
        let mut table = self.table.write().map_err(|_| StoreError::Poisoned)?;
        let mut movie = Movie {
            id: 0,
            title: input.title.clone(),
            release: input.release,
        };
        check_movie(&movie)?;
        movie.id = table.next_id();
        table.rows.insert(movie.id, movie.clone());
        Ok(movie)
    }

    async fn update(&self, id: DbId, input: &UpdateMovie) -> StoreResult<Option<Movie>> {
        let mut table = self.table.write().map_err(|_| StoreError::Poisoned)?;
        let Some(row) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        let mut updated = row.clone();
        updated.apply(input);
        check_movie(&updated)?;
        *row = updated.clone();
        Ok(Some(updated))
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        let mut table = self.table.write().map_err(|_| StoreError::Poisoned)?;
        Ok(table.rows.remove(&id).is_some())
    }
}

/// Actor store holding rows in process memory.
#[derive(Debug, Default)]
pub struct InMemoryActorStore {
    table: RwLock<Table<Actor>>,
}

impl InMemoryActorStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ActorStore for InMemoryActorStore {
    async fn list(&self, page: PageRequest) -> StoreResult<Page<Actor>> {
        let table = self.table.read().map_err(|_| StoreError::Poisoned)?;
        let mut ordered: Vec<&Actor> = table.rows.values().collect();
        ordered.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(Page {
            items: paginate(&ordered, page).iter().map(|a| (*a).clone()).collect(),
            total: ordered.len() as u64,
        })
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Actor>> {
        let table = self.table.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, input: &CreateActor) -> StoreResult<Actor> {
        let mut table = self.table.write().map_err(|_| StoreError::Poisoned)?;
        let mut actor = Actor {
            id: 0,
            name: input.name.clone(),
            age: input.age,
            gender: input.gender.clone(),
        };
        check_actor(&actor)?;
        actor.id = table.next_id();
        table.rows.insert(actor.id, actor.clone());
        Ok(actor)
    }

    async fn update(&self, id: DbId, input: &UpdateActor) -> StoreResult<Option<Actor>> {
        let mut table = self.table.write().map_err(|_| StoreError::Poisoned)?;
        let Some(row) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        let mut updated = row.clone();
        updated.apply(input);
        check_actor(&updated)?;
        *row = updated.clone();
        Ok(Some(updated))
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        let mut table = self.table.write().map_err(|_| StoreError::Poisoned)?;
        Ok(table.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    use super::*;

    fn new_movie(title: &str) -> CreateMovie {
        CreateMovie {
            title: title.to_string(),
            release: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn new_actor(name: &str, age: i32) -> CreateActor {
        CreateActor {
            name: name.to_string(),
            age,
            gender: "Female".to_string(),
        }
    }

    #[tokio::test]
    async fn ids_are_assigned_and_never_reused() {
        let store = InMemoryMovieStore::new();
        let a = store.create(&new_movie("Arrival")).await.unwrap();
        let b = store.create(&new_movie("Blade Runner")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        assert!(store.delete(b.id).await.unwrap());
        let c = store.create(&new_movie("Contact")).await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn listing_is_ordered_by_title_and_paginated() {
        let store = InMemoryMovieStore::new();
        for i in (0..13).rev() {
            store.create(&new_movie(&format!("Movie {i:02}"))).await.unwrap();
        }

        let first = store.list(PageRequest::new(1)).await.unwrap();
        assert_eq!(first.total, 13);
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.items[0].title, "Movie 00");
        assert_eq!(first.items[9].title, "Movie 09");

        let second = store.list(PageRequest::new(2)).await.unwrap();
        assert_eq!(second.items.len(), 3);
        assert_eq!(second.total, 13);

        assert!(store.list(PageRequest::new(3)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn partial_update_keeps_other_fields() {
        let store = InMemoryMovieStore::new();
        let created = store.create(&new_movie("Dune")).await.unwrap();

        let update = UpdateMovie {
            title: Some("Dune: Part One".into()),
            release: None,
        };
        let updated = store.update(created.id, &update).await.unwrap().unwrap();
        assert_eq!(updated.title, "Dune: Part One");
        assert_eq!(updated.release, created.release);

        let missing = store.update(99, &update).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn over_long_title_is_a_constraint_violation() {
        let store = InMemoryMovieStore::new();
        let title = "x".repeat(TITLE_MAX_LEN + 1);
        assert_matches!(store.create(&new_movie(&title)).await, Err(StoreError::Constraint(_)));

        let created = store.create(&new_movie("Ok")).await.unwrap();
        let update = UpdateMovie {
            title: Some(title),
            release: None,
        };
        assert_matches!(store.update(created.id, &update).await, Err(StoreError::Constraint(_)));

        // The failed update left the row untouched.
        let row = store.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(row.title, "Ok");
    }

    #[tokio::test]
    async fn actor_constraints_mirror_the_schema() {
        let store = InMemoryActorStore::new();
        assert_matches!(store.create(&new_actor("", 30)).await, Err(StoreError::Constraint(_)));
        assert_matches!(store.create(&new_actor("Kid", 0)).await, Err(StoreError::Constraint(_)));

        let created = store.create(&new_actor("Tilda", 63)).await.unwrap();
        let update = UpdateActor {
            age: Some(64),
            ..Default::default()
        };
        let updated = store.update(created.id, &update).await.unwrap().unwrap();
        assert_eq!(updated.age, 64);
        assert_eq!(updated.name, "Tilda");
    }

    #[tokio::test]
    async fn delete_missing_actor_reports_false() {
        let store = InMemoryActorStore::new();
        assert!(!store.delete(7).await.unwrap());

        let created = store.create(&new_actor("Oscar", 40)).await.unwrap();
        assert!(store.delete(created.id).await.unwrap());
        assert!(store.find_by_id(created.id).await.unwrap().is_none());
        assert_eq!(store.list(PageRequest::default()).await.unwrap().total, 0);
    }
}
