//! Confirmation port
//!
//! A yes/no question asked before destructive work. Any `Fn(&str) -> bool`
//! is a confirmation, which keeps the pipeline testable without a terminal.

/// Ask the operator to confirm `prompt`
pub trait Confirmation {
    /// `true` only on an explicit affirmative answer
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirmation for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
