use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Page {page} of {entity} listing is empty")]
    EmptyPage { entity: &'static str, page: u32 },

    #[error("Validation failed: {0}")]
    Validation(String),
}
