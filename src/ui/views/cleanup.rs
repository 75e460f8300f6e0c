//! Cleanup command UI views
//!
//! Progress lines printed while a cleanup runs.

use std::io::{self, Write};
use std::sync::Mutex;

use user_cleanup::domain::ports::{CleanupEvent, CleanupEventSink};
use user_cleanup::CleanupOutcome;

use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;

/// Render one progress event; `None` for events that print nothing
pub fn render_event(event: &CleanupEvent, verbose: u8, color: bool) -> Option<String> {
    match event {
        CleanupEvent::BackendSelected { backend } if verbose > 0 => Some(
            ColoredText::dim(format!("Using user backend '{}'", backend)).render(color),
        ),
        CleanupEvent::StorageResolved { storage, root } if verbose > 0 => Some(
            ColoredText::dim(format!("Home storage {} at {}", storage, root)).render(color),
        ),
        CleanupEvent::BackendSelected { .. } | CleanupEvent::StorageResolved { .. } => None,
        CleanupEvent::ConfirmationRequested { prompt, .. } => {
            Some(ColoredText::warning(prompt.as_str()).render(color))
        }
        CleanupEvent::NoFiles { .. } => Some(CleanupOutcome::NoFilesPresent.to_string()),
        CleanupEvent::DeletingFiles { .. } => {
            Some("Deleting all files from the user's home directory...".to_string())
        }
        CleanupEvent::CleaningCache { .. } => Some("Cleaning up filecache...".to_string()),
        CleanupEvent::Done { .. } => {
            Some(ColoredText::success(CleanupOutcome::Completed.to_string()).render(color))
        }
    }
}

/// Line printed after the operator declined
pub fn render_aborted(color: bool) -> String {
    ColoredText::dim("Aborted, no files were deleted.").render(color)
}

/// Why the question was declined when nobody could answer it
pub fn render_declined_without_terminal(color: bool) -> String {
    ColoredText::warning(
        "No terminal to answer the confirmation, declined. Pass --yes to delete the files anyway.",
    )
    .render(color)
}

/// Prints progress lines as the pipeline reports its steps
pub struct ConsoleEventSink {
    verbose: u8,
    color: bool,
    prompt_drawn_elsewhere: bool,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout(ui: &UiContext) -> Self {
        Self::with_writer(ui, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(ui: &UiContext, writer: W) -> Self {
        Self {
            verbose: ui.verbose,
            color: ui.color,
            prompt_drawn_elsewhere: false,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Skip the confirmation question when an interactive prompt shows it
    pub fn with_interactive_prompt(mut self, interactive: bool) -> Self {
        self.prompt_drawn_elsewhere = interactive;
        self
    }
}

impl CleanupEventSink for ConsoleEventSink {
    fn on_event(&self, event: CleanupEvent) {
        if self.prompt_drawn_elsewhere
            && matches!(event, CleanupEvent::ConfirmationRequested { .. })
        {
            return;
        }
        let Some(line) = render_event(&event, self.verbose, self.color) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}
