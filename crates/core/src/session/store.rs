//! In-memory runtime value store.

use std::collections::HashMap;

use partyledger_shared::FilterValue;

/// Runtime field values for one filter session.
///
/// Fields that were never written read as [`FilterValue::Empty`].
#[derive(Debug, Clone, Default)]
pub struct ValueStore {
    values: HashMap<String, FilterValue>,
}

impl ValueStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of a field.
    #[must_use]
    pub fn get(&self, name: &str) -> FilterValue {
        self.values.get(name).cloned().unwrap_or_default()
    }

    /// Writes a field value.
    pub fn set(&mut self, name: impl Into<String>, value: FilterValue) {
        self.values.insert(name.into(), value);
    }

    /// Clears a field back to [`FilterValue::Empty`].
    pub fn clear(&mut self, name: &str) {
        self.values.remove(name);
    }

    /// Snapshot of all non-empty values.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<String, FilterValue> {
        self.values
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}
