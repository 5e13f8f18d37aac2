//! Report name to filter set mapping.
//!
//! The registry replaces ambient global registration: the report-engine
//! integration layer owns one instance and resolves filter sets explicitly.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::filters::FilterSet;

/// Errors that can occur while registering report filter sets.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A filter set is already registered under this report name.
    #[error("Report already registered: {0}")]
    DuplicateReport(String),
}

/// Explicit mapping from report name to filter set.
#[derive(Debug, Clone, Default)]
pub struct ReportRegistry {
    sets: HashMap<String, Arc<FilterSet>>,
}

impl ReportRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a filter set under a report name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateReport` when the name is taken.
    pub fn register(
        &mut self,
        report: impl Into<String>,
        set: FilterSet,
    ) -> Result<(), RegistryError> {
        let report = report.into();
        if self.sets.contains_key(&report) {
            return Err(RegistryError::DuplicateReport(report));
        }
        self.sets.insert(report, Arc::new(set));
        Ok(())
    }

    /// Resolves the filter set for a report.
    #[must_use]
    pub fn get(&self, report: &str) -> Option<Arc<FilterSet>> {
        self.sets.get(report).cloned()
    }

    /// Registered report names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FilterField;

    fn minimal_set() -> FilterSet {
        FilterSet::builder()
            .field(FilterField::date("as_of", "As Of"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_register_and_resolve() {
        let mut registry = ReportRegistry::new();
        registry.register("General Ledger", minimal_set()).unwrap();

        assert!(registry.get("General Ledger").is_some());
        assert!(registry.get("Trial Balance").is_none());
        assert_eq!(registry.names(), vec!["General Ledger"]);
    }

    #[test]
    fn test_duplicate_report_rejected() {
        let mut registry = ReportRegistry::new();
        registry.register("General Ledger", minimal_set()).unwrap();

        let result = registry.register("General Ledger", minimal_set());

        assert!(matches!(
            result,
            Err(RegistryError::DuplicateReport(name)) if name == "General Ledger"
        ));
    }
}
