//! Filter session errors.

use thiserror::Error;

/// Errors that can occur on the user edit path.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The named field is not part of the session's filter set.
    #[error("Unknown filter field: {0}")]
    UnknownField(String),

    /// The field can only be written by a cascade rule.
    #[error("Field is read-only: {0}")]
    ReadOnlyField(String),
}
