//! Cleanup Use Case
//!
//! Removes the files and file-cache entries of a deleted user.
//!
//! This module handles:
//! - Resolving the user backend the account belonged to
//! - Asking for confirmation when the account still exists
//! - Locating the account's home storage
//! - Deleting the home content and clearing its cache

mod executor;
mod locator;
mod options;
mod outcome;
mod use_case;

#[cfg(test)]
pub(crate) mod test_support;

pub use executor::{CleanupExecutor, FILES_DIR};
pub use locator::locate_storage;
pub use options::CleanupOptions;
pub use outcome::CleanupOutcome;
pub use use_case::CleanupUseCase;
