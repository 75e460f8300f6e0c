//! Home mounts under a data directory
//!
//! Each account's home is `<data_dir>/<account_id>`, backed by
//! `LocalStorage` and a `JsonFileCache` keyed `home::<account_id>`.

use std::path::{Path, PathBuf};

use crate::config::StorageConfig;
use crate::domain::ports::{AccountSession, Mount, MountProvider, MountUnavailable};
use crate::domain::value_objects::AccountId;
use crate::infrastructure::cache::JsonFileCache;

use super::LocalStorage;

/// Mount provider for homes stored under a shared data directory
#[derive(Debug, Clone)]
pub struct DataDirMounts {
    data_dir: PathBuf,
    cache_path: PathBuf,
}

impl DataDirMounts {
    pub fn new(data_dir: impl Into<PathBuf>, cache_path: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            cache_path: cache_path.into(),
        }
    }

    pub fn from_config(storage: &StorageConfig) -> Self {
        Self::new(storage.data_dir.clone(), storage.cache_path())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    /// Id of an account's home storage
    pub fn storage_id(account: &AccountId) -> String {
        format!("home::{}", account)
    }

    /// Home directory of an account, if the id is usable as a directory name
    pub fn home_dir(&self, account: &AccountId) -> Result<PathBuf, MountUnavailable> {
        let segment = account
            .as_path_segment()
            .map_err(|reason| MountUnavailable::new(format!("invalid user id: {}", reason)))?;
        Ok(self.data_dir.join(segment))
    }

    /// The cache of an account's home storage
    pub fn cache_for(&self, account: &AccountId) -> JsonFileCache {
        JsonFileCache::open(&self.cache_path, Self::storage_id(account))
    }
}

impl MountProvider for DataDirMounts {
    fn home_mount(&self, session: &AccountSession<'_>) -> Result<Mount, MountUnavailable> {
        if !self.data_dir.is_dir() {
            return Err(MountUnavailable::new(format!(
                "data directory {} does not exist",
                self.data_dir.display()
            )));
        }

        let account = session.account();
        let root = self.home_dir(account)?;
        let storage = LocalStorage::new(
            Self::storage_id(account),
            root.clone(),
            self.cache_for(account),
        );

        Ok(Mount::new(root, Box::new(storage)))
    }
}
