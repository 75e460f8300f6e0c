//! Cleanup Event Port
//!
//! Every pipeline step is reported through this sink so the caller can
//! render progress lines or a JSON event stream.

/// Event emitted during a cleanup run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupEvent {
    /// A user backend was selected
    BackendSelected { backend: String },

    /// The account is still known and `prompt` is about to be asked
    ConfirmationRequested { account: String, prompt: String },

    /// Home storage resolved
    StorageResolved { storage: String, root: String },

    /// The storage has no `files` directory; nothing will be deleted
    NoFiles { storage: String },

    /// Removal of the storage content started
    DeletingFiles { storage: String },

    /// Cache invalidation started
    CleaningCache { storage: String },

    /// Files removed and cache cleared
    Done { storage: String },
}

/// Trait for receiving cleanup events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress lines in the terminal
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: Silent operation
pub trait CleanupEventSink {
    /// Handle a cleanup event
    fn on_event(&self, event: CleanupEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl CleanupEventSink for NoopEventSink {
    fn on_event(&self, _event: CleanupEvent) {}
}
