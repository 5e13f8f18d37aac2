//! Filter engine for the Common Party Ledger report.
//!
//! This crate declares typed report filter schemas and runs them at runtime:
//!
//! - `filters` - Filter field descriptors, cascade rules, and defaults
//! - `env` - Framework environment seam (clock, user defaults, localization)
//! - `lookup` - Asynchronous record-attribute lookup seam
//! - `session` - Runtime filter values and cascade execution
//! - `registry` - Report name to filter set mapping
//! - `reports` - Concrete report filter declarations

pub mod env;
pub mod filters;
pub mod lookup;
pub mod registry;
pub mod reports;
pub mod session;
