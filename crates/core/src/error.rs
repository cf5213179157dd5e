use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A create payload left out (or sent empty) at least one required field.
    ///
    /// `required` is the full list the caller must send; `missing` is the
    /// subset that failed the check.
    #[error("Missing required fields: {}", .missing.join(", "))]
    MissingFields {
        required: Vec<&'static str>,
        missing: Vec<&'static str>,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
