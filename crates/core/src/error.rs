/// Domain error taxonomy shared by every layer below the HTTP boundary.
///
/// Each variant maps to exactly one HTTP status in the API crate:
/// `NotFound` -> 404, `Validation` -> 400, `Internal` -> 500.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
