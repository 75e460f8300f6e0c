//! Inline account list backend

use std::collections::BTreeSet;

use crate::domain::ports::{short_type_name, UserBackend};
use crate::domain::value_objects::AccountId;

/// Accounts listed directly in the configuration
#[derive(Debug, Clone, Default)]
pub struct ListBackend {
    name: Option<String>,
    users: BTreeSet<String>,
}

impl ListBackend {
    pub fn new<I, S>(users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: None,
            users: users.into_iter().map(Into::into).collect(),
        }
    }

    /// Give the backend a display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserBackend for ListBackend {
    fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn type_name(&self) -> &str {
        short_type_name::<Self>()
    }

    fn user_exists(&self, account: &AccountId) -> bool {
        self.users.contains(account.as_str())
    }
}
