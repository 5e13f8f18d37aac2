//! Map-backed record lookup for tests and embedded use.

use std::collections::HashMap;

use async_trait::async_trait;
use partyledger_shared::FilterValue;

use super::{LookupError, RecordLookup};

/// Record lookup backed by an in-memory attribute map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLookup {
    attributes: HashMap<(String, String, String), FilterValue>,
}

impl InMemoryLookup {
    /// Creates an empty lookup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one record attribute.
    #[must_use]
    pub fn with_attribute(
        mut self,
        entity: impl Into<String>,
        record_key: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<FilterValue>,
    ) -> Self {
        self.attributes.insert(
            (entity.into(), record_key.into(), attribute.into()),
            value.into(),
        );
        self
    }
}

#[async_trait]
impl RecordLookup for InMemoryLookup {
    async fn fetch_field(
        &self,
        entity: &str,
        record_key: &str,
        attribute: &str,
    ) -> Result<Option<FilterValue>, LookupError> {
        let key = (
            entity.to_string(),
            record_key.to_string(),
            attribute.to_string(),
        );
        Ok(self.attributes.get(&key).cloned())
    }
}
