//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A typed create input, already validated by the caller
//! - An update input (all `Option` fields) for partial updates

pub mod actor;
pub mod movie;
