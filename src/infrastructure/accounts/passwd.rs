//! passwd-style file backend
//!
//! One account per line, fields separated by `:`, the first field is the
//! account id. Blank lines and `#` comments are skipped.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ports::{short_type_name, UserBackend};
use crate::domain::value_objects::AccountId;
use crate::error::{CleanupError, CleanupResult};

/// Accounts read from a passwd-style file. Has no display name.
#[derive(Debug, Clone)]
pub struct PasswdFileBackend {
    path: PathBuf,
    users: BTreeSet<String>,
}

impl PasswdFileBackend {
    /// Read the account file.
    ///
    /// A file that cannot be read is a configuration error. Reporting it as
    /// an empty account list would let live accounts skip confirmation.
    pub fn load(path: &Path) -> CleanupResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| CleanupError::Config {
            file: path.to_path_buf(),
            message: format!("cannot read account file: {}", e),
        })?;
        Ok(Self::parse(path, &content))
    }

    pub fn parse(path: &Path, content: &str) -> Self {
        let users = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split(':').next())
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            path: path.to_path_buf(),
            users,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserBackend for PasswdFileBackend {
    fn type_name(&self) -> &str {
        short_type_name::<Self>()
    }

    fn user_exists(&self, account: &AccountId) -> bool {
        self.users.contains(account.as_str())
    }
}
