//! Error rendering
//!
//! Backend selection errors are operator input problems and print their
//! remediation on stdout, with the valid backend names indented below.
//! Everything else is an `[ERROR]` line on stderr.

use user_cleanup::domain::services::ResolutionError;
use user_cleanup::CleanupError;

use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::ErrorEvent};
use crate::ui::primitives::text::ColoredText;

const INDENT: &str = "    ";

/// Stable error code for JSON output
pub fn error_code(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<CleanupError>() {
        Some(CleanupError::Resolution(resolution)) => resolution.code(),
        Some(CleanupError::StorageUnavailable { .. }) => "storage-unavailable",
        Some(CleanupError::InvalidCache { .. }) => "invalid-cache",
        Some(CleanupError::Storage { .. }) => "storage-error",
        Some(CleanupError::Cache { .. }) => "cache-error",
        Some(CleanupError::Config { .. }) => "config-error",
        Some(CleanupError::Io(_)) => "io-error",
        None => "error",
    }
}

/// Remediation text for a backend selection failure
pub fn render_resolution_error(err: &ResolutionError) -> String {
    let mut out = match err {
        ResolutionError::NoBackendsRegistered => {
            return "No user backend is configured, add a [[backends]] entry to the configuration file.\n"
                .to_string();
        }
        ResolutionError::NoneMatched { requested, .. } => format!(
            "User backend '{}' not found.\nAvailable user backends:\n",
            requested
        ),
        ResolutionError::Ambiguous { requested, .. } => format!(
            "Multiple user backends matching '{}' found, this is currently not supported.\nAvailable user backends:\n",
            requested
        ),
        ResolutionError::UnspecifiedWithMultipleAvailable { .. } => {
            "More than one user backend is configured, please select one of the following backends with the `--user-backend` option.\n"
                .to_string()
        }
    };

    for name in err.available() {
        out.push_str(INDENT);
        out.push_str(name);
        out.push('\n');
    }
    out
}

/// One-line next step for JSON error events
pub fn resolution_help(err: &ResolutionError) -> &'static str {
    match err {
        ResolutionError::NoBackendsRegistered => {
            "Add a [[backends]] entry to the configuration file"
        }
        _ => "Select one of the available backends with --user-backend <NAME>",
    }
}

pub fn format_error(err: &anyhow::Error, color: bool) -> String {
    format!(
        "{} {}\n",
        ColoredText::error("[ERROR]").bold().render(color),
        err
    )
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    let resolution = match err.downcast_ref::<CleanupError>() {
        Some(CleanupError::Resolution(resolution)) => Some(resolution),
        _ => None,
    };

    if ui.json {
        let mut event = ErrorEvent::new(error_code(err), err.to_string());
        if let Some(resolution) = resolution {
            event = event
                .with_available(resolution.available())
                .with_help(resolution_help(resolution));
        }
        let _ = emit_event(&event);
        return;
    }

    match resolution {
        Some(resolution) => print!("{}", render_resolution_error(resolution)),
        None => eprint!("{}", format_error(err, ui.color)),
    }
}
