//! Report declaration errors.

use thiserror::Error;

use crate::filters::FilterError;
use crate::registry::RegistryError;

/// Errors that can occur while declaring and registering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The filter schema failed validation.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// Registration into the report registry failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
