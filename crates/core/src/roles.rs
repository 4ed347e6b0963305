//! Well-known roles and the permissions each one is granted.
//!
//! Roles are not checked by the service itself; the guard only looks at the
//! `permissions` claim. These presets exist so tokens minted for development
//! and tests carry the same grants the identity provider issues.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::permissions::{
    DELETE_ACTORS, DELETE_MOVIES, GET_ACTORS, GET_MOVIES, PATCH_ACTORS, PATCH_MOVIES, POST_ACTORS,
    POST_MOVIES,
};

const CASTING_ASSISTANT: &[&str] = &[GET_ACTORS, GET_MOVIES];

const CASTING_DIRECTOR: &[&str] = &[
    GET_ACTORS,
    GET_MOVIES,
    POST_ACTORS,
    DELETE_ACTORS,
    PATCH_ACTORS,
    PATCH_MOVIES,
];

const EXECUTIVE_PRODUCER: &[&str] = &[
    GET_ACTORS,
    GET_MOVIES,
    POST_ACTORS,
    DELETE_ACTORS,
    PATCH_ACTORS,
    PATCH_MOVIES,
    POST_MOVIES,
    DELETE_MOVIES,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Can view actors and movies.
    CastingAssistant,
    /// Assistant grants, plus managing actors and editing movies.
    CastingDirector,
    /// Every permission.
    ExecutiveProducer,
}

impl Role {
    pub const ALL: [Role; 3] = [
        Role::CastingAssistant,
        Role::CastingDirector,
        Role::ExecutiveProducer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::CastingAssistant => "casting_assistant",
            Role::CastingDirector => "casting_director",
            Role::ExecutiveProducer => "executive_producer",
        }
    }

    pub fn permissions(&self) -> &'static [&'static str] {
        match self {
            Role::CastingAssistant => CASTING_ASSISTANT,
            Role::CastingDirector => CASTING_DIRECTOR,
            Role::ExecutiveProducer => EXECUTIVE_PRODUCER,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    /// Accepts the snake_case name, or the same with hyphens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| CoreError::Validation(format!("unknown role '{s}'")))
    }
}
