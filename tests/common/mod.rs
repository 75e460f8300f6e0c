//! Common test utilities for user-cleanup CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with a data dir and config file
//! - Assertion macros: `assert_output_contains!`, `assert_home_empty!`

#![allow(dead_code)]

pub mod assertions;
pub mod env;

pub use env::*;
