//! Concrete report filter declarations.

pub mod common_party_ledger;
pub mod error;

#[cfg(test)]
mod tests;

pub use error::ReportError;
