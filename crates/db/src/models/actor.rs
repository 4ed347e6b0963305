//! Actor entity model and DTOs.

use casting_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Width of the `actors.name` column, in characters.
pub const NAME_MAX_LEN: usize = 120;

/// A row from the `actors` table. Serializes as `{id, name, age, gender}`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub gender: String,
}

impl Actor {
    /// Overwrite the fields supplied in `input`, leaving the rest untouched.
    pub fn apply(&mut self, input: &UpdateActor) {
        if let Some(name) = &input.name {
            self.name.clone_from(name);
        }
        if let Some(age) = input.age {
            self.age = age;
        }
        if let Some(gender) = &input.gender {
            self.gender.clone_from(gender);
        }
    }
}

/// Input for inserting an actor. All fields are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateActor {
    pub name: String,
    pub age: i32,
    pub gender: String,
}

/// Input for a partial update. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateActor {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
}

impl UpdateActor {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.gender.is_none()
    }
}
