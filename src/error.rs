//! Error types for user-cleanup
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{CacheError, FsError};
use crate::domain::services::ResolutionError;

/// Result type alias for cleanup operations
pub type CleanupResult<T> = Result<T, CleanupError>;

/// Main error type for the cleanup pipeline
#[derive(Error, Debug)]
pub enum CleanupError {
    /// The requested user backend could not be resolved to exactly one backend
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// No home storage could be resolved for the account
    #[error("no home storage available for user '{account}': {reason}")]
    StorageUnavailable { account: String, reason: String },

    /// The home storage's cache is not one this tool knows how to clear
    #[error("home storage has invalid cache: expected {expected}, found {found}")]
    InvalidCache {
        expected: &'static str,
        found: &'static str,
    },

    /// Removing files from the home storage failed
    #[error("failed to delete files of storage '{storage}': {source}")]
    Storage {
        storage: String,
        #[source]
        source: FsError,
    },

    /// Clearing the file cache failed
    #[error("failed to clean up filecache of storage '{storage}': {source}")]
    Cache {
        storage: String,
        #[source]
        source: CacheError,
    },

    /// Configuration file could not be read or parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
