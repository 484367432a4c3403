//! Error types for document assembly.

use thiserror::Error;

/// Result type alias for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that abort a generation run.
///
/// Missing fragments are deliberately not here: they are recorded as
/// [`crate::RenderWarning`]s and the run continues without them.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unknown deployment profile: {0}")]
    UnknownProfile(String),
}
