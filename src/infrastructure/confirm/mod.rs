//! Confirmation implementations

mod interactive;

pub use interactive::{AssumeYes, DialoguerConfirmation};
