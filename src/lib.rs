//! user-cleanup - remove the files left behind by a deleted user
//!
//! When an account is deleted its home directory and file-cache entries can
//! stay behind. This crate resolves which user backend the account belonged
//! to, asks before touching the files of an account that still exists,
//! empties the home storage and clears its metadata cache.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CleanupOptions, CleanupOutcome, CleanupUseCase};
pub use config::Config;
pub use domain::value_objects::AccountId;
pub use error::{CleanupError, CleanupResult};
