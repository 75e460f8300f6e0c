//! Account identifier value object
//!
//! The id is opaque to the pipeline, but it is joined onto the data
//! directory to find the account's home, so it must stay a single path
//! segment.

use std::fmt;

/// Identifier of the account whose files are cleaned up
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(String);

impl AccountId {
    /// Create a new account id (no validation is done here)
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the id as a single path segment, or the reason it is not one.
    pub fn as_path_segment(&self) -> Result<&str, &'static str> {
        let id = self.0.as_str();
        if id.is_empty() {
            return Err("user id is empty");
        }
        if id == "." || id == ".." {
            return Err("user id must not be '.' or '..'");
        }
        if id.starts_with('.') {
            return Err("user id must not start with '.'");
        }
        if id.contains(['/', '\\', '\0']) {
            return Err("user id must not contain path separators");
        }
        Ok(id)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
