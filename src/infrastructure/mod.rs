//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `accounts/` - User backends and the account manager
//! - `fs/` - Local home storage and data-dir mounts
//! - `cache/` - JSON file metadata cache
//! - `events/` - NDJSON event sink
//! - `confirm/` - Terminal confirmation

pub mod accounts;
pub mod cache;
pub mod confirm;
pub mod events;
pub mod fs;

// Re-export for convenience
pub use accounts::{ListBackend, PasswdFileBackend, RegisteredAccounts};
pub use cache::{CacheEntry, JsonFileCache};
pub use confirm::{AssumeYes, DialoguerConfirmation};
pub use events::JsonEventSink;
pub use fs::{DataDirMounts, LocalStorage};
