//! Cleanup command handler
//!
//! Removes the home files and file-cache entries of a deleted user.

use anyhow::Result;
use is_terminal::IsTerminal;

use user_cleanup::application::{CleanupOptions, CleanupOutcome};
use user_cleanup::config::Config;
use user_cleanup::domain::ports::{CleanupEventSink, Confirmation};
use user_cleanup::infrastructure::{AssumeYes, DialoguerConfirmation, JsonEventSink};
use user_cleanup::presentation::create_cleanup_use_case;
use user_cleanup::AccountId;

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent};
use crate::ui::views::cleanup::{
    render_aborted, render_declined_without_terminal, ConsoleEventSink,
};

/// Execute the cleanup command
pub fn cmd_cleanup(
    config: &Config,
    ui: &UiContext,
    user_id: &str,
    user_backend: Option<String>,
    yes: bool,
) -> Result<CleanupOutcome> {
    let use_case = create_cleanup_use_case(config)?;
    let account = AccountId::new(user_id);
    let options = CleanupOptions::new().with_user_backend(user_backend);

    if ui.json {
        emit_event(&StartEvent::new("cleanup").with_user(user_id))?;
    }

    let interactive = !yes && std::io::stdin().is_terminal();
    let events: Box<dyn CleanupEventSink> = if ui.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout(ui).with_interactive_prompt(interactive))
    };
    let confirm: Box<dyn Confirmation> = if yes {
        Box::new(AssumeYes)
    } else {
        Box::new(DialoguerConfirmation::new())
    };

    let outcome = use_case.execute(&account, &options, confirm.as_ref(), events.as_ref())?;

    if ui.json {
        emit_event(&CompleteEvent::success("cleanup").with_outcome(outcome.as_str()))?;
    } else if outcome == CleanupOutcome::Aborted {
        if !interactive {
            println!("{}", render_declined_without_terminal(ui.color));
        }
        println!("{}", render_aborted(ui.color));
    }

    Ok(outcome)
}
