//! Pure domain logic for the casting agency service.
//!
//! Nothing in this crate touches the database or HTTP. It holds the shared
//! error type, permission strings and role presets, page-window math, and the
//! shallow field checks applied to incoming request bodies.

pub mod error;
pub mod pagination;
pub mod permissions;
pub mod roles;
pub mod types;
pub mod validation;
