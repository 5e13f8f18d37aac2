//! Runtime filter values and cascade execution.
//!
//! A [`FilterSession`] holds the mutable values of one report view. It is
//! created when the view opens and discarded when the view closes; the
//! schema it runs is immutable.

pub mod error;
pub mod service;
pub mod store;
pub mod types;


pub use error::SessionError;
pub use service::FilterSession;
pub use store::ValueStore;
pub use types::ResolutionState;
