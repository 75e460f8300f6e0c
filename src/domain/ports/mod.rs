//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod account_manager;
pub mod cleanup_events;
pub mod confirmation;
pub mod metadata_cache;
pub mod mount_provider;
pub mod storage;

pub use account_manager::{backend_name, short_type_name, AccountManager, UserBackend};
pub use cleanup_events::{CleanupEvent, CleanupEventSink, NoopEventSink};
pub use confirmation::Confirmation;
pub use metadata_cache::{CacheError, CacheResult, MetadataCache};
pub use mount_provider::{AccountSession, Mount, MountProvider, MountUnavailable};
pub use storage::{FsError, FsResult, Storage};
