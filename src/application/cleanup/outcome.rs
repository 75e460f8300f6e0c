//! Cleanup outcome

use std::fmt;

/// Terminal result of a cleanup run that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupOutcome {
    /// The home storage has no `files` directory; nothing was touched
    NoFilesPresent,
    /// Files deleted and cache cleared
    Completed,
    /// The operator declined to delete the files of a live account
    Aborted,
}

impl CleanupOutcome {
    /// Stable machine-readable name
    pub fn as_str(&self) -> &'static str {
        match self {
            CleanupOutcome::NoFilesPresent => "no_files",
            CleanupOutcome::Completed => "completed",
            CleanupOutcome::Aborted => "aborted",
        }
    }
}

impl fmt::Display for CleanupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanupOutcome::NoFilesPresent => {
                write!(f, "user doesn't seem to have any files to delete")
            }
            CleanupOutcome::Completed => write!(f, "Done"),
            CleanupOutcome::Aborted => write!(f, "Aborted"),
        }
    }
}
