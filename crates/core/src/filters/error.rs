//! Filter schema construction errors.

use thiserror::Error;

/// Errors that can occur while building a filter set.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Two fields share the same name.
    #[error("Duplicate filter field: {0}")]
    DuplicateField(String),

    /// A field was declared with an empty name.
    #[error("Filter field name cannot be empty")]
    EmptyFieldName,

    /// A field depends on a field that is not in the set.
    #[error("Field {field} depends on unknown field {depends_on}")]
    UnknownDependency {
        /// The dependent field.
        field: String,
        /// The missing dependency target.
        depends_on: String,
    },

    /// A field depends on itself.
    #[error("Field {0} cannot depend on itself")]
    SelfDependency(String),

    /// A cascade rule watches a field that is not in the set.
    #[error("Cascade rule watches unknown field: {0}")]
    CascadeSourceUnknown(String),

    /// A cascade rule writes to a field that is not in the set.
    #[error("Cascade rule targets unknown field: {0}")]
    CascadeTargetUnknown(String),

    /// A cascade rule watches and writes to the same field.
    #[error("Cascade rule source and target are the same field: {0}")]
    CascadeSelfTarget(String),
}
