//! Movie entity model and DTOs.

use casting_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Width of the `movies.title` column, in characters.
pub const TITLE_MAX_LEN: usize = 120;

/// A row from the `movies` table. Serializes as `{id, title, release}`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub release: Timestamp,
}

impl Movie {
    /// Overwrite the fields supplied in `input`, leaving the rest untouched.
    pub fn apply(&mut self, input: &UpdateMovie) {
        if let Some(title) = &input.title {
            self.title.clone_from(title);
        }
        if let Some(release) = input.release {
            self.release = release;
        }
    }
}

/// Input for inserting a movie. Both fields are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMovie {
    pub title: String,
    pub release: Timestamp,
}

/// Input for a partial update. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub release: Option<Timestamp>,
}

impl UpdateMovie {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.release.is_none()
    }
}
