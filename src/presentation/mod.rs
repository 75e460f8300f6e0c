//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! Rendering lives in the binary's `ui` module.
//!
//! ## Usage
//!
//! ```ignore
//! use user_cleanup::presentation::factory;
//!
//! let use_case = factory::create_cleanup_use_case(&config)?;
//! let outcome = use_case.execute(&account, &options, &confirm, &events)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_cleanup_use_case, ConcreteCleanupUseCase};
