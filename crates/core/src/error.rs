use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The row exists but the write did not apply to it.
    #[error("Concurrent modification of {entity} with id {id}")]
    ConcurrencyConflict { entity: &'static str, id: DbId },

    #[error("Internal error: {0}")]
    Internal(String),
}
