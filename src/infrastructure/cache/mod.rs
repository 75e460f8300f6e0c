//! Metadata cache stores

mod json_file;

pub use json_file::{CacheEntry, JsonFileCache};
