//! Domain Services
//!
//! Pure decision logic of the cleanup pipeline. These services only talk
//! to ports and are easily testable.

mod backend_resolver;
mod existence_guard;

pub use backend_resolver::{resolve_backend, ResolutionError};
pub use existence_guard::{check_and_confirm, confirmation_prompt};
