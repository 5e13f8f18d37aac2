//! Declarative report filter schemas.
//!
//! A report declares its input controls as an ordered [`FilterSet`] of typed
//! [`FilterField`] descriptors plus zero or more [`CascadeRule`]s linking a
//! watched field to a dependent one. The schema is immutable once built;
//! runtime values live in a session (see [`crate::session`]).

pub mod defaults;
pub mod error;
pub mod types;


pub use defaults::DefaultValue;
pub use error::FilterError;
pub use types::{CascadeRule, FieldKind, FilterField, FilterSet, FilterSetBuilder};
