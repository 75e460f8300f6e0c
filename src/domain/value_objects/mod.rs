//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod account_id;

pub use account_id::AccountId;
