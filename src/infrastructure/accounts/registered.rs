//! Registered accounts - the configured backends, in order

use crate::config::BackendConfig;
use crate::domain::ports::{AccountManager, UserBackend};
use crate::domain::value_objects::AccountId;
use crate::error::CleanupResult;

use super::{ListBackend, PasswdFileBackend};

/// Account manager over the configured backends
pub struct RegisteredAccounts {
    backends: Vec<Box<dyn UserBackend>>,
}

impl RegisteredAccounts {
    pub fn new(backends: Vec<Box<dyn UserBackend>>) -> Self {
        Self { backends }
    }

    /// Build every configured backend, failing on the first that cannot load
    pub fn from_config(configs: &[BackendConfig]) -> CleanupResult<Self> {
        let mut backends: Vec<Box<dyn UserBackend>> = Vec::with_capacity(configs.len());

        for config in configs {
            match config {
                BackendConfig::List { name, users } => {
                    let mut backend = ListBackend::new(users.iter().cloned());
                    if let Some(name) = name {
                        backend = backend.with_name(name.clone());
                    }
                    backends.push(Box::new(backend));
                }
                BackendConfig::Passwd { path } => {
                    backends.push(Box::new(PasswdFileBackend::load(path)?));
                }
            }
        }

        Ok(Self::new(backends))
    }
}

impl AccountManager for RegisteredAccounts {
    fn user_exists(&self, account: &AccountId) -> bool {
        self.backends.iter().any(|b| b.user_exists(account))
    }

    fn backends(&self) -> &[Box<dyn UserBackend>] {
        &self.backends
    }
}
