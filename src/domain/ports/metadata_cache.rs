//! Metadata cache port
//!
//! The cache indexes a storage's file tree. Once the files are removed
//! out-of-band the index must be cleared, or it keeps pointing at files
//! that no longer exist.

use std::any::Any;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// Cache store errors
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("cache index I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache index is corrupted ({path}): {message}")]
    Corrupted { path: PathBuf, message: String },

    #[error("failed to serialize cache index: {message}")]
    Serialization { message: String },
}

/// Index over a storage's files
pub trait MetadataCache: Any {
    /// Name of the implementation, reported on type mismatches
    fn kind(&self) -> &'static str;

    /// Drop every entry of the storage this cache belongs to
    fn clear(&mut self) -> CacheResult<()>;

    /// Access to the concrete implementation
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
