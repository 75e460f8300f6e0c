//! JSON Event Sink
//!
//! Outputs cleanup events as NDJSON for scripts and automation.

use crate::domain::ports::{CleanupEvent, CleanupEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl CleanupEventSink for JsonEventSink {
    fn on_event(&self, event: CleanupEvent) {
        let json = match event {
            CleanupEvent::BackendSelected { backend } => serde_json::json!({
                "event": "backend_selected",
                "command": "cleanup",
                "backend": backend,
            }),

            CleanupEvent::ConfirmationRequested { account, prompt } => serde_json::json!({
                "event": "confirmation_requested",
                "command": "cleanup",
                "user": account,
                "prompt": prompt,
            }),

            CleanupEvent::StorageResolved { storage, root } => serde_json::json!({
                "event": "storage_resolved",
                "command": "cleanup",
                "storage": storage,
                "root": root,
            }),

            CleanupEvent::NoFiles { storage } => serde_json::json!({
                "event": "no_files",
                "command": "cleanup",
                "storage": storage,
            }),

            CleanupEvent::DeletingFiles { storage } => serde_json::json!({
                "event": "deleting_files",
                "command": "cleanup",
                "storage": storage,
            }),

            CleanupEvent::CleaningCache { storage } => serde_json::json!({
                "event": "cleaning_cache",
                "command": "cleanup",
                "storage": storage,
            }),

            CleanupEvent::Done { storage } => serde_json::json!({
                "event": "done",
                "command": "cleanup",
                "storage": storage,
            }),
        };

        self.write_event(json);
    }
}
