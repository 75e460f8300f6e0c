//! Terminal confirmation
//!
//! Asks on the terminal via `dialoguer`. Without a terminal there is no one
//! to answer, so the question is declined.

use dialoguer::Confirm;
use is_terminal::IsTerminal;

use crate::domain::ports::Confirmation;

/// Yes/no prompt on the terminal, defaulting to "no"
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerConfirmation;

impl DialoguerConfirmation {
    pub fn new() -> Self {
        Self
    }
}

impl Confirmation for DialoguerConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        if !std::io::stdin().is_terminal() {
            return false;
        }

        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

/// Answers yes without asking (`--yes`)
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirmation for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
