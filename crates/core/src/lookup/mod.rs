//! Asynchronous record-attribute lookup seam.
//!
//! Cascade rules resolve linked records through this trait. Production
//! deployments back it with the framework's data-access layer; tests and
//! embedded use back it with [`InMemoryLookup`].

pub mod memory;

pub use memory::InMemoryLookup;

use async_trait::async_trait;
use partyledger_shared::FilterValue;
use thiserror::Error;

/// Errors returned by a lookup backend.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The backend failed to answer the request.
    #[error("Lookup backend error: {0}")]
    Backend(String),
}

impl LookupError {
    /// Creates a backend error from any message.
    #[must_use]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}

/// Fetches a single attribute of a record by entity type and key.
#[async_trait]
pub trait RecordLookup: Send + Sync {
    /// Fetches `attribute` of the `entity` record identified by `record_key`.
    ///
    /// Returns `Ok(None)` when no such record exists.
    ///
    /// # Errors
    ///
    /// Returns `LookupError` when the backend cannot answer.
    async fn fetch_field(
        &self,
        entity: &str,
        record_key: &str,
        attribute: &str,
    ) -> Result<Option<FilterValue>, LookupError>;
}
