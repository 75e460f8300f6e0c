//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::CleanupUseCase;
use crate::config::Config;
use crate::error::CleanupResult;
use crate::infrastructure::{DataDirMounts, JsonFileCache, RegisteredAccounts};

/// Type alias for the concrete CleanupUseCase with all dependencies
pub type ConcreteCleanupUseCase = CleanupUseCase<RegisteredAccounts, DataDirMounts, JsonFileCache>;

/// Create a cleanup use case from the configuration
///
/// Fails when a configured backend cannot be loaded.
pub fn create_cleanup_use_case(config: &Config) -> CleanupResult<ConcreteCleanupUseCase> {
    let accounts = RegisteredAccounts::from_config(&config.backends)?;
    let mounts = DataDirMounts::from_config(&config.storage);

    Ok(CleanupUseCase::new(accounts, mounts))
}
