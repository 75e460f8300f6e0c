//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config) are inherited by all subcommands
//! - Without `--yes`, removing the files of a live user requires an interactive answer

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// user-cleanup - remove the files left behind by a deleted user
#[derive(Parser, Debug)]
#[command(name = "user-cleanup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ~/.config/user-cleanup/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cleanup files of a deleted user
    Cleanup {
        /// Id of the user to cleanup the files for
        user_id: String,

        /// User backend the user belonged to
        #[arg(short = 'b', long, value_name = "NAME")]
        user_backend: Option<String>,

        /// Do not ask for confirmation when the user still exists
        #[arg(short, long)]
        yes: bool,
    },

    /// List the registered user backends
    Backends,

    /// Index a user's home directory into the file cache
    Scan {
        /// Id of the user whose home is indexed
        user_id: String,
    },
}
