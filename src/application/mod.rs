//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CleanupUseCase` - resolve backend, confirm, locate storage, delete, clear cache

pub mod cleanup;

pub use cleanup::{CleanupExecutor, CleanupOptions, CleanupOutcome, CleanupUseCase};
