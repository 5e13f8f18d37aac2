//! Common types used across the application.

pub mod value;

pub use value::FilterValue;
