//! Cleanup options

/// Options for the cleanup command
#[derive(Debug, Clone, Default)]
pub struct CleanupOptions {
    /// Backend the user belonged to (required when several are registered)
    pub user_backend: Option<String>,
}

impl CleanupOptions {
    /// Create new cleanup options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested user backend
    pub fn with_user_backend(mut self, backend: Option<String>) -> Self {
        self.user_backend = backend;
        self
    }
}
