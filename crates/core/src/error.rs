use crate::types::DbId;

/// Domain-level error vocabulary shared across the workspace.
///
/// The HTTP layer wraps this in its own error type and decides status codes;
/// nothing here knows about axum or sqlx.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),
}
