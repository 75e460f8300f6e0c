//! Storage port - the account's home storage
//!
//! Paths handed to a storage are relative to its root; `""` is the root
//! itself.

use std::path::PathBuf;

use super::metadata_cache::MetadataCache;

/// Result type for storage operations
pub type FsResult<T> = Result<T, FsError>;

/// Storage operation errors
#[derive(Debug)]
pub enum FsError {
    /// Permission denied
    PermissionDenied(PathBuf),
    /// Path would leave the storage root
    OutsideRoot(String),
    /// I/O error
    Io(std::io::Error),
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(PathBuf::new()),
            _ => FsError::Io(err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::OutsideRoot(path) => write!(f, "Path leaves storage root: {}", path),
            FsError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Abstract home storage
///
/// Implementations:
/// - `LocalStorage` - a directory on local disk
/// - in-memory fakes in tests
pub trait Storage {
    /// Stable storage id, used to key the metadata cache
    fn id(&self) -> &str;

    /// Check if `path` is an existing directory
    fn is_dir(&self, path: &str) -> bool;

    /// Recursively remove `path`; `""` removes everything under the root
    fn rmdir(&self, path: &str) -> FsResult<()>;

    /// The metadata cache indexing this storage
    fn cache_mut(&mut self) -> &mut dyn MetadataCache;
}
