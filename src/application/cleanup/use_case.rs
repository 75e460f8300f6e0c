//! Cleanup Use Case
//!
//! Orchestrates one cleanup run: resolve the backend, gate on the account
//! still existing, locate the home storage, delete and invalidate.
//!
//! Runs are not safe to execute concurrently against the same account.

use std::marker::PhantomData;

use crate::domain::ports::{
    backend_name, AccountManager, CleanupEvent, CleanupEventSink, Confirmation, MetadataCache,
    MountProvider,
};
use crate::domain::services::{check_and_confirm, resolve_backend};
use crate::domain::value_objects::AccountId;
use crate::error::CleanupResult;

use super::executor::CleanupExecutor;
use super::locator::locate_storage;
use super::options::CleanupOptions;
use super::outcome::CleanupOutcome;

/// Cleanup use case - removes the home files and file cache of one account
///
/// `C` is the cache implementation the mounts are expected to carry.
pub struct CleanupUseCase<AM, MP, C>
where
    AM: AccountManager,
    MP: MountProvider,
    C: MetadataCache,
{
    accounts: AM,
    mounts: MP,
    _cache: PhantomData<fn() -> C>,
}

impl<AM, MP, C> CleanupUseCase<AM, MP, C>
where
    AM: AccountManager,
    MP: MountProvider,
    C: MetadataCache,
{
    /// Create a new cleanup use case
    pub fn new(accounts: AM, mounts: MP) -> Self {
        Self {
            accounts,
            mounts,
            _cache: PhantomData,
        }
    }

    pub fn accounts(&self) -> &AM {
        &self.accounts
    }

    pub fn mounts(&self) -> &MP {
        &self.mounts
    }

    /// Execute the cleanup.
    ///
    /// Later stages never run once an earlier one fails or is declined.
    pub fn execute(
        &self,
        account: &AccountId,
        options: &CleanupOptions,
        confirm: &dyn Confirmation,
        events: &dyn CleanupEventSink,
    ) -> CleanupResult<CleanupOutcome> {
        let backend = resolve_backend(options.user_backend.as_deref(), self.accounts.backends())?;
        events.on_event(CleanupEvent::BackendSelected {
            backend: backend_name(backend).to_string(),
        });

        let announce_then_confirm = |prompt: &str| {
            events.on_event(CleanupEvent::ConfirmationRequested {
                account: account.to_string(),
                prompt: prompt.to_string(),
            });
            confirm.confirm(prompt)
        };
        if !check_and_confirm(account, &self.accounts, &announce_then_confirm) {
            return Ok(CleanupOutcome::Aborted);
        }

        let mut mount = locate_storage(account, backend, &self.mounts)?;
        events.on_event(CleanupEvent::StorageResolved {
            storage: mount.storage().id().to_string(),
            root: mount.root().display().to_string(),
        });

        CleanupExecutor::<C>::new().execute(&mut mount, events)
    }
}
