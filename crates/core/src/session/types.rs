//! Session state types.

use serde::{Deserialize, Serialize};

/// Observable state of a cascade-populated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionState {
    /// No value and no lookup outstanding.
    Empty,
    /// A lookup for this field is in flight.
    Pending,
    /// The field holds a resolved value.
    Resolved,
}
