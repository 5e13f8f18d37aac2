//! Filter session with cascade execution.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use partyledger_shared::FilterValue;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::error::SessionError;
use super::store::ValueStore;
use super::types::ResolutionState;
use crate::env::FilterEnv;
use crate::filters::{CascadeRule, FilterSet};
use crate::lookup::RecordLookup;

/// One outstanding cascade lookup, keyed by its target field.
struct Inflight {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

/// Runtime filter values for one report view, with cascade execution.
///
/// Each edit of a cascade source field supersedes the previous in-flight
/// lookup for the same target: the old lookup's cancellation token is
/// cancelled before the target is touched, so a slow stale lookup can never
/// overwrite a newer value. Clearing the source empties the target
/// synchronously under the same guarantee.
///
/// Lookup failures (backend error or missing record) leave the target
/// unchanged; they are logged and never propagate to the edit path.
///
/// Must be used inside a Tokio runtime: cascade lookups run as spawned tasks.
pub struct FilterSession {
    schema: Arc<FilterSet>,
    values: Arc<Mutex<ValueStore>>,
    lookup: Arc<dyn RecordLookup>,
    inflight: Mutex<HashMap<String, Inflight>>,
}

impl FilterSession {
    /// Creates a session for the given schema, evaluating field defaults
    /// against the environment.
    #[must_use]
    pub fn new(schema: Arc<FilterSet>, lookup: Arc<dyn RecordLookup>, env: &dyn FilterEnv) -> Self {
        let mut store = ValueStore::new();
        for field in schema.fields() {
            if let Some(default) = &field.default {
                let value = default.evaluate(env);
                if !value.is_empty() {
                    store.set(&field.name, value);
                }
            }
        }

        Self {
            schema,
            values: Arc::new(Mutex::new(store)),
            lookup,
            inflight: Mutex::new(HashMap::new()),
        }
    }

    /// The schema this session runs.
    #[must_use]
    pub fn schema(&self) -> &FilterSet {
        &self.schema
    }

    /// Returns the current value of a field.
    ///
    /// Unknown fields read as [`FilterValue::Empty`], matching the store
    /// contract the report engine relies on.
    #[must_use]
    pub fn get_value(&self, name: &str) -> FilterValue {
        self.lock_values().get(name)
    }

    /// Snapshot of all non-empty values, for report execution.
    #[must_use]
    pub fn values(&self) -> HashMap<String, FilterValue> {
        self.lock_values().snapshot()
    }

    /// Names of required fields that currently hold no value, in
    /// declaration order.
    #[must_use]
    pub fn missing_required(&self) -> Vec<String> {
        let store = self.lock_values();
        self.schema
            .fields()
            .iter()
            .filter(|field| field.required && store.get(&field.name).is_empty())
            .map(|field| field.name.clone())
            .collect()
    }

    /// Sets a field value through the user edit path and runs any cascade
    /// rules watching the field.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when the field is not in the schema or is
    /// read-only (read-only fields are only written by cascade rules).
    pub fn set_value(
        &self,
        name: &str,
        value: impl Into<FilterValue>,
    ) -> Result<(), SessionError> {
        let field = self
            .schema
            .field(name)
            .ok_or_else(|| SessionError::UnknownField(name.to_string()))?;
        if field.read_only {
            return Err(SessionError::ReadOnlyField(name.to_string()));
        }

        let value = value.into();
        debug!(field = name, "filter value changed");
        self.lock_values().set(name, value.clone());

        for rule in self.schema.cascades_from(name) {
            self.apply_cascade(rule, &value);
        }

        Ok(())
    }

    /// Observable cascade state of a target field.
    #[must_use]
    pub fn resolution_state(&self, target: &str) -> ResolutionState {
        let pending = self.lock_inflight().get(target).is_some_and(|inflight| {
            !inflight.token.is_cancelled() && !inflight.handle.is_finished()
        });
        if pending {
            return ResolutionState::Pending;
        }
        if self.get_value(target).is_empty() {
            ResolutionState::Empty
        } else {
            ResolutionState::Resolved
        }
    }

    /// Waits for all in-flight cascade lookups to finish.
    pub async fn settle(&self) {
        let drained: Vec<Inflight> = self
            .lock_inflight()
            .drain()
            .map(|(_, inflight)| inflight)
            .collect();
        for inflight in drained {
            // Join errors only arise from panics inside the lookup task.
            let _ = inflight.handle.await;
        }
    }

    /// Runs one cascade rule for a new source value.
    fn apply_cascade(&self, rule: &CascadeRule, value: &FilterValue) {
        // Supersede the outstanding lookup for this target before touching
        // anything: its token must be cancelled by the time we write.
        if let Some(previous) = self.lock_inflight().remove(&rule.target) {
            previous.token.cancel();
        }

        if value.is_empty() {
            self.lock_values().clear(&rule.target);
            debug!(target = %rule.target, "cascade source cleared, target emptied");
            return;
        }

        let Some(record_key) = value.as_text() else {
            warn!(
                source = %rule.source,
                "cascade source holds a non-text value, target left unchanged"
            );
            return;
        };

        let token = CancellationToken::new();
        let task_token = token.clone();
        let values = Arc::clone(&self.values);
        let lookup = Arc::clone(&self.lookup);
        let target = rule.target.clone();
        let rule = rule.clone();
        let record_key = record_key.to_string();

        let handle = tokio::spawn(async move {
            let fetched = tokio::select! {
                () = task_token.cancelled() => return,
                fetched = lookup.fetch_field(&rule.entity, &record_key, &rule.attribute) => fetched,
            };

            match fetched {
                Ok(Some(resolved)) => {
                    // Check-and-write is atomic under the store lock; a
                    // superseding edit cancels before it writes, so a stale
                    // write here is always overwritten by the newer edit.
                    let mut store = values.lock().unwrap_or_else(PoisonError::into_inner);
                    if task_token.is_cancelled() {
                        return;
                    }
                    store.set(&rule.target, resolved);
                    debug!(target = %rule.target, "cascade target resolved");
                }
                Ok(None) => {
                    warn!(
                        entity = %rule.entity,
                        key = %record_key,
                        "linked record not found, cascade target left unchanged"
                    );
                }
                Err(err) => {
                    warn!(
                        error = %err,
                        entity = %rule.entity,
                        key = %record_key,
                        "linked record lookup failed, cascade target left unchanged"
                    );
                }
            }
        });

        self.lock_inflight()
            .insert(target, Inflight { token, handle });
    }

    fn lock_values(&self) -> MutexGuard<'_, ValueStore> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_inflight(&self) -> MutexGuard<'_, HashMap<String, Inflight>> {
        self.inflight.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
