//! Shared value types and calendar helpers for Partyledger.
//!
//! This crate provides the primitives used across all other crates:
//! - The `FilterValue` runtime value type
//! - Calendar helpers for date-based filter defaults

pub mod calendar;
pub mod types;

pub use types::FilterValue;
