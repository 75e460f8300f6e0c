//! Cleanup executor
//!
//! Deletes the home storage content, then clears the cache indexing it.
//! Nothing is retried and nothing is rolled back: once deletion starts it
//! runs to completion or failure.
//!
//! The cache type is checked after deletion. A storage wired with an
//! unexpected cache therefore loses its files and then fails with
//! `InvalidCache`, leaving a stale index behind for the operator to fix.

use std::marker::PhantomData;

use crate::domain::ports::{short_type_name, CleanupEvent, CleanupEventSink, MetadataCache, Mount};
use crate::error::{CleanupError, CleanupResult};

use super::outcome::CleanupOutcome;

/// Directory whose presence means the account has files
pub const FILES_DIR: &str = "files";

/// Runs the destructive part of a cleanup against one mount.
///
/// `C` is the cache implementation this executor knows how to clear.
pub struct CleanupExecutor<C> {
    _expected_cache: PhantomData<fn() -> C>,
}

impl<C: MetadataCache> CleanupExecutor<C> {
    pub fn new() -> Self {
        Self {
            _expected_cache: PhantomData,
        }
    }

    pub fn execute(
        &self,
        mount: &mut Mount,
        events: &dyn CleanupEventSink,
    ) -> CleanupResult<CleanupOutcome> {
        let storage = mount.storage_mut();
        let storage_id = storage.id().to_string();

        if !storage.is_dir(FILES_DIR) {
            events.on_event(CleanupEvent::NoFiles {
                storage: storage_id,
            });
            return Ok(CleanupOutcome::NoFilesPresent);
        }

        events.on_event(CleanupEvent::DeletingFiles {
            storage: storage_id.clone(),
        });
        storage
            .rmdir("")
            .map_err(|source| CleanupError::Storage {
                storage: storage_id.clone(),
                source,
            })?;

        events.on_event(CleanupEvent::CleaningCache {
            storage: storage_id.clone(),
        });
        let cache = storage.cache_mut();
        let found = cache.kind();
        let cache = cache
            .as_any_mut()
            .downcast_mut::<C>()
            .ok_or(CleanupError::InvalidCache {
                expected: short_type_name::<C>(),
                found,
            })?;
        cache.clear().map_err(|source| CleanupError::Cache {
            storage: storage_id.clone(),
            source,
        })?;

        events.on_event(CleanupEvent::Done {
            storage: storage_id,
        });
        Ok(CleanupOutcome::Completed)
    }
}

impl<C: MetadataCache> Default for CleanupExecutor<C> {
    fn default() -> Self {
        Self::new()
    }
}
