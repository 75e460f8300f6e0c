//! Configuration module
//!
//! Precedence, highest first:
//! 1. CLI flags
//! 2. Environment variables (`USER_CLEANUP_*`)
//! 3. Config file (`--config`, `USER_CLEANUP_CONFIG`, or
//!    `~/.config/user-cleanup/config.toml`)
//! 4. Built-in defaults

mod loader;
mod types;

pub use loader::{
    load_with_warnings, user_config_path, ConfigWarning, COLOR_ENV, CONFIG_ENV, DATA_DIR_ENV,
};
pub use types::{BackendConfig, ColorMode, Config, OutputConfig, StorageConfig};
