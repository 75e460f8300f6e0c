//! Storage locator
//!
//! Looks up the home mount of an account through a transient session bound
//! to the selected backend.

use crate::domain::ports::{AccountSession, Mount, MountProvider, UserBackend};
use crate::domain::value_objects::AccountId;
use crate::error::{CleanupError, CleanupResult};

/// Resolve the account's home storage
pub fn locate_storage(
    account: &AccountId,
    backend: &dyn UserBackend,
    mounts: &dyn MountProvider,
) -> CleanupResult<Mount> {
    let session = AccountSession::new(account, backend);
    mounts
        .home_mount(&session)
        .map_err(|unavailable| CleanupError::StorageUnavailable {
            account: account.to_string(),
            reason: unavailable.reason,
        })
}
