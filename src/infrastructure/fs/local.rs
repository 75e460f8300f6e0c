//! Local disk storage
//!
//! Implements the Storage port for a home directory on local disk.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::domain::ports::{FsError, FsResult, MetadataCache, Storage};

/// A home directory on local disk together with its metadata cache
pub struct LocalStorage {
    id: String,
    root: PathBuf,
    cache: Box<dyn MetadataCache>,
}

impl LocalStorage {
    pub fn new(
        id: impl Into<String>,
        root: impl Into<PathBuf>,
        cache: impl MetadataCache,
    ) -> Self {
        Self {
            id: id.into(),
            root: root.into(),
            cache: Box::new(cache),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Join a storage-relative path onto the root.
    ///
    /// Absolute paths and `..` are rejected.
    fn resolve(&self, path: &str) -> FsResult<PathBuf> {
        let relative = Path::new(path);
        let mut resolved = self.root.clone();

        for component in relative.components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(FsError::OutsideRoot(path.to_string()));
                }
            }
        }

        Ok(resolved)
    }
}

impl Storage for LocalStorage {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_dir(&self, path: &str) -> bool {
        self.resolve(path).map(|p| p.is_dir()).unwrap_or(false)
    }

    fn rmdir(&self, path: &str) -> FsResult<()> {
        let target = self.resolve(path)?;

        // The root itself stays; only its contents go
        if target == self.root {
            return empty_dir(&target);
        }

        match fs::symlink_metadata(&target) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(&target, e)),
            Ok(meta) if meta.is_dir() => {
                fs::remove_dir_all(&target).map_err(|e| io_error(&target, e))
            }
            Ok(_) => Err(FsError::Io(io::Error::other(format!(
                "not a directory: {}",
                target.display()
            )))),
        }
    }

    fn cache_mut(&mut self) -> &mut dyn MetadataCache {
        self.cache.as_mut()
    }
}

fn empty_dir(dir: &Path) -> FsResult<()> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(io_error(dir, e)),
    };

    for entry in entries {
        let entry = entry.map_err(|e| io_error(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| io_error(&path, e))?;

        let removed = if file_type.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        removed.map_err(|e| io_error(&path, e))?;
    }

    Ok(())
}

fn io_error(path: &Path, err: io::Error) -> FsError {
    match err.kind() {
        io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
        _ => FsError::Io(err),
    }
}
