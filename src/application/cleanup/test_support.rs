//! In-memory fakes for the cleanup pipeline tests

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::domain::ports::{
    AccountManager, AccountSession, CacheError, CacheResult, CleanupEvent, CleanupEventSink,
    FsError, FsResult, MetadataCache, Mount, MountProvider, MountUnavailable, Storage,
    UserBackend,
};
use crate::domain::value_objects::AccountId;

pub(crate) struct StaticBackend {
    name: Option<&'static str>,
    users: Vec<&'static str>,
}

impl StaticBackend {
    pub(crate) fn named(name: &'static str, users: &[&'static str]) -> Self {
        Self {
            name: Some(name),
            users: users.to_vec(),
        }
    }
}

impl UserBackend for StaticBackend {
    fn display_name(&self) -> Option<&str> {
        self.name
    }

    fn type_name(&self) -> &str {
        "StaticBackend"
    }

    fn user_exists(&self, account: &AccountId) -> bool {
        self.users.contains(&account.as_str())
    }
}

pub(crate) struct StaticAccounts {
    backends: Vec<Box<dyn UserBackend>>,
}

impl StaticAccounts {
    pub(crate) fn new(backends: Vec<StaticBackend>) -> Self {
        Self {
            backends: backends
                .into_iter()
                .map(|b| Box::new(b) as Box<dyn UserBackend>)
                .collect(),
        }
    }
}

impl AccountManager for StaticAccounts {
    fn user_exists(&self, account: &AccountId) -> bool {
        self.backends.iter().any(|b| b.user_exists(account))
    }

    fn backends(&self) -> &[Box<dyn UserBackend>] {
        &self.backends
    }
}

#[derive(Debug, Default)]
pub(crate) struct StorageState {
    pub has_files: bool,
    pub fail_rmdir: bool,
    pub rmdir_calls: Vec<String>,
}

pub(crate) struct MemoryStorage {
    state: Rc<RefCell<StorageState>>,
    cache: Box<dyn MetadataCache>,
}

impl MemoryStorage {
    pub(crate) fn new(state: Rc<RefCell<StorageState>>, cache: impl MetadataCache) -> Self {
        Self {
            state,
            cache: Box::new(cache),
        }
    }

    pub(crate) fn with_files(cache: impl MetadataCache) -> (Self, Rc<RefCell<StorageState>>) {
        let state = Rc::new(RefCell::new(StorageState {
            has_files: true,
            ..StorageState::default()
        }));
        (Self::new(state.clone(), cache), state)
    }
}

impl Storage for MemoryStorage {
    fn id(&self) -> &str {
        "home::mem"
    }

    fn is_dir(&self, path: &str) -> bool {
        path == "files" && self.state.borrow().has_files
    }

    fn rmdir(&self, path: &str) -> FsResult<()> {
        let mut state = self.state.borrow_mut();
        state.rmdir_calls.push(path.to_string());
        if state.fail_rmdir {
            return Err(FsError::Io(std::io::Error::other("disk on fire")));
        }
        state.has_files = false;
        Ok(())
    }

    fn cache_mut(&mut self) -> &mut dyn MetadataCache {
        self.cache.as_mut()
    }
}

pub(crate) struct RecordingCache {
    clears: Rc<Cell<usize>>,
    fail: bool,
}

impl RecordingCache {
    pub(crate) fn new() -> (Self, Rc<Cell<usize>>) {
        let clears = Rc::new(Cell::new(0));
        (Self::sharing(clears.clone()), clears)
    }

    pub(crate) fn sharing(clears: Rc<Cell<usize>>) -> Self {
        Self {
            clears,
            fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            clears: Rc::new(Cell::new(0)),
            fail: true,
        }
    }
}

impl MetadataCache for RecordingCache {
    fn kind(&self) -> &'static str {
        "RecordingCache"
    }

    fn clear(&mut self) -> CacheResult<()> {
        if self.fail {
            return Err(CacheError::Io(std::io::Error::other("index locked")));
        }
        self.clears.set(self.clears.get() + 1);
        Ok(())
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A cache the pipeline does not know how to clear
pub(crate) struct ForeignCache;

impl MetadataCache for ForeignCache {
    fn kind(&self) -> &'static str {
        "ForeignCache"
    }

    fn clear(&mut self) -> CacheResult<()> {
        Ok(())
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Hands out a fresh storage over the same shared state on every lookup
pub(crate) struct MemoryMounts {
    pub state: Rc<RefCell<StorageState>>,
    pub clears: Rc<Cell<usize>>,
    pub lookups: Cell<usize>,
}

impl MemoryMounts {
    pub(crate) fn with_files() -> Self {
        Self {
            state: Rc::new(RefCell::new(StorageState {
                has_files: true,
                ..StorageState::default()
            })),
            clears: Rc::new(Cell::new(0)),
            lookups: Cell::new(0),
        }
    }
}

impl MountProvider for MemoryMounts {
    fn home_mount(&self, session: &AccountSession<'_>) -> Result<Mount, MountUnavailable> {
        self.lookups.set(self.lookups.get() + 1);
        let storage = MemoryStorage::new(
            self.state.clone(),
            RecordingCache::sharing(self.clears.clone()),
        );
        Ok(Mount::new(
            format!("/mem/{}", session.account()),
            Box::new(storage),
        ))
    }
}

#[derive(Default)]
pub(crate) struct RecordingSink {
    pub events: RefCell<Vec<CleanupEvent>>,
}

impl RecordingSink {
    pub(crate) fn names(&self) -> Vec<&'static str> {
        self.events
            .borrow()
            .iter()
            .map(|e| match e {
                CleanupEvent::BackendSelected { .. } => "backend_selected",
                CleanupEvent::ConfirmationRequested { .. } => "confirmation_requested",
                CleanupEvent::StorageResolved { .. } => "storage_resolved",
                CleanupEvent::NoFiles { .. } => "no_files",
                CleanupEvent::DeletingFiles { .. } => "deleting_files",
                CleanupEvent::CleaningCache { .. } => "cleaning_cache",
                CleanupEvent::Done { .. } => "done",
            })
            .collect()
    }
}

impl CleanupEventSink for RecordingSink {
    fn on_event(&self, event: CleanupEvent) {
        self.events.borrow_mut().push(event);
    }
}
