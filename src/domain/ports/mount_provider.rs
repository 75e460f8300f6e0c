//! Mount provider port - maps an account to its home storage
//!
//! The provider is asked with a short-lived `AccountSession`; nothing about
//! the session outlives the lookup.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::account_manager::{backend_name, UserBackend};
use super::storage::Storage;
use crate::domain::value_objects::AccountId;

/// Transient account handle bound to the backend it belongs to
#[derive(Clone, Copy)]
pub struct AccountSession<'a> {
    account: &'a AccountId,
    backend: &'a dyn UserBackend,
}

impl<'a> AccountSession<'a> {
    pub fn new(account: &'a AccountId, backend: &'a dyn UserBackend) -> Self {
        Self { account, backend }
    }

    pub fn account(&self) -> &'a AccountId {
        self.account
    }

    pub fn backend_name(&self) -> &'a str {
        backend_name(self.backend)
    }
}

impl std::fmt::Debug for AccountSession<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountSession")
            .field("account", self.account)
            .field("backend", &self.backend_name())
            .finish()
    }
}

/// The account's home storage, mounted at `root`
pub struct Mount {
    root: PathBuf,
    storage: Box<dyn Storage>,
}

impl Mount {
    pub fn new(root: impl Into<PathBuf>, storage: Box<dyn Storage>) -> Self {
        Self {
            root: root.into(),
            storage,
        }
    }

    /// Where the storage lives (informational)
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    pub fn storage_mut(&mut self) -> &mut dyn Storage {
        self.storage.as_mut()
    }
}

impl std::fmt::Debug for Mount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mount")
            .field("root", &self.root)
            .field("storage", &self.storage.id())
            .finish()
    }
}

/// Why no home mount could be produced
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct MountUnavailable {
    pub reason: String,
}

impl MountUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Resolves the home mount of an account
pub trait MountProvider {
    fn home_mount(&self, session: &AccountSession<'_>) -> Result<Mount, MountUnavailable>;
}
