//! JSON file metadata cache
//!
//! One index file shared by every home storage under a data dir:
//!
//! ```json
//! { "version": 1, "storages": { "home::alice": [ { "path": "files/a.txt", ... } ] } }
//! ```
//!
//! Rewrites go to a temp file in the same directory and are renamed into
//! place while holding an exclusive lock on `<index>.lock`.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::domain::ports::{CacheError, CacheResult, MetadataCache};

const INDEX_VERSION: u32 = 1;

/// One indexed file or directory, relative to the storage root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub path: String,
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtime: Option<DateTime<Utc>>,
    pub indexed_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CacheIndex {
    version: u32,
    #[serde(default)]
    storages: BTreeMap<String, Vec<CacheEntry>>,
}

impl Default for CacheIndex {
    fn default() -> Self {
        Self {
            version: INDEX_VERSION,
            storages: BTreeMap::new(),
        }
    }
}

/// Metadata cache of one storage, backed by a shared JSON index file
#[derive(Debug, Clone)]
pub struct JsonFileCache {
    path: PathBuf,
    storage_id: String,
}

impl JsonFileCache {
    pub fn open(path: impl Into<PathBuf>, storage_id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            storage_id: storage_id.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn storage_id(&self) -> &str {
        &self.storage_id
    }

    /// Entries of this storage; empty when the index does not exist yet
    pub fn entries(&self) -> CacheResult<Vec<CacheEntry>> {
        let mut index = self.load_index()?;
        Ok(index.storages.remove(&self.storage_id).unwrap_or_default())
    }

    /// Replace this storage's entries, leaving other storages untouched
    pub fn replace_entries(&self, entries: Vec<CacheEntry>) -> CacheResult<()> {
        let id = self.storage_id.clone();
        self.update(move |index| {
            index.storages.insert(id, entries);
            true
        })
    }

    /// Re-index the tree under `root` and return the number of entries
    pub fn scan(&self, root: &Path) -> CacheResult<usize> {
        let entries = walk_entries(root)?;
        let count = entries.len();
        self.replace_entries(entries)?;
        Ok(count)
    }

    /// `<index file name>.lock`, never the index itself
    fn lock_path(&self) -> PathBuf {
        let mut path = self.path.clone().into_os_string();
        path.push(".lock");
        PathBuf::from(path)
    }

    fn load_index(&self) -> CacheResult<CacheIndex> {
        if !self.path.exists() {
            return Ok(CacheIndex::default());
        }

        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| CacheError::Corrupted {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn save_index(&self, index: &CacheIndex) -> CacheResult<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)?;

        let content =
            serde_json::to_string_pretty(index).map_err(|e| CacheError::Serialization {
                message: e.to_string(),
            })?;

        let mut tmp = NamedTempFile::new_in(&parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| CacheError::Io(e.error))?;
        Ok(())
    }

    /// Load, modify and save the index under the exclusive lock.
    /// The index is only written when `f` reports a change.
    fn update<F>(&self, f: F) -> CacheResult<()>
    where
        F: FnOnce(&mut CacheIndex) -> bool,
    {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let lock_file = fs::File::create(&lock_path)?;
        lock_file.lock_exclusive()?;

        let result = self.load_index().and_then(|mut index| {
            if f(&mut index) {
                index.version = INDEX_VERSION;
                self.save_index(&index)
            } else {
                Ok(())
            }
        });

        let _ = lock_file.unlock();
        result
    }
}

impl MetadataCache for JsonFileCache {
    fn kind(&self) -> &'static str {
        "JsonFileCache"
    }

    fn clear(&mut self) -> CacheResult<()> {
        if !self.path.exists() {
            return Ok(());
        }
        let id = self.storage_id.clone();
        self.update(move |index| index.storages.remove(&id).is_some())
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

fn walk_entries(root: &Path) -> CacheResult<Vec<CacheEntry>> {
    let indexed_at = Utc::now();
    let mut entries = Vec::new();

    let walker = ignore::WalkBuilder::new(root)
        .hidden(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .parents(false)
        .build();

    for result in walker {
        let entry = result.map_err(walk_error)?;
        if entry.depth() == 0 {
            continue;
        }

        let metadata = entry.metadata().map_err(walk_error)?;
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        entries.push(CacheEntry {
            path,
            size: if metadata.is_file() { metadata.len() } else { 0 },
            mtime: metadata.modified().ok().map(DateTime::<Utc>::from),
            indexed_at,
        });
    }

    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

fn walk_error(err: ignore::Error) -> CacheError {
    CacheError::Io(io::Error::other(err))
}
