//! Request body schemas.
//!
//! Every field is optional on the wire so that a missing field and a falsy one
//! are treated alike by `validate` rather than failing in the deserializer.
//! Creation requires every field to be truthy; a patch drops falsy fields and
//! only fails when nothing is left. Unknown fields are ignored.

use casting_core::error::CoreError;
use casting_core::types::Timestamp;
use casting_core::validation::{
    parse_timestamp, require_any_field, require_positive, require_text, require_timestamp,
    truthy_positive, truthy_text,
};
use casting_db::models::actor::{CreateActor, UpdateActor};
use casting_db::models::movie::{CreateMovie, UpdateMovie};
use serde::{Deserialize, Deserializer};

/// Accepts an RFC 3339 timestamp or a bare date. `null` and blank strings
/// read as absent so the presence check can report them.
fn release_date<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => parse_timestamp(&raw)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Body of `POST /movies`.
#[derive(Debug, Default, Deserialize)]
pub struct NewMovieBody {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "release_date")]
    pub release: Option<Timestamp>,
}

impl NewMovieBody {
    pub fn validate(self) -> Result<CreateMovie, CoreError> {
        Ok(CreateMovie {
            title: require_text("title", self.title)?,
            release: require_timestamp("release", self.release)?,
        })
    }
}

/// Body of `PATCH /movies/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct MoviePatchBody {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "release_date")]
    pub release: Option<Timestamp>,
}

impl MoviePatchBody {
    pub fn validate(self) -> Result<UpdateMovie, CoreError> {
        let update = UpdateMovie {
            title: truthy_text(self.title),
            release: self.release,
        };
        require_any_field(!update.is_empty())?;
        Ok(update)
    }
}

/// Body of `POST /actors`.
#[derive(Debug, Default, Deserialize)]
pub struct NewActorBody {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
}

impl NewActorBody {
    pub fn validate(self) -> Result<CreateActor, CoreError> {
        Ok(CreateActor {
            name: require_text("name", self.name)?,
            age: require_positive("age", self.age)?,
            gender: require_text("gender", self.gender)?,
        })
    }
}

/// Body of `PATCH /actors/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct ActorPatchBody {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
}

impl ActorPatchBody {
    pub fn validate(self) -> Result<UpdateActor, CoreError> {
        let update = UpdateActor {
            name: truthy_text(self.name),
            age: truthy_positive("age", self.age)?,
            gender: truthy_text(self.gender),
        };
        require_any_field(!update.is_empty())?;
        Ok(update)
    }
}
