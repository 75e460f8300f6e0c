//! user-cleanup CLI - remove the files left behind by a deleted user
//!
//! Usage: user-cleanup <COMMAND>
//!
//! Commands:
//!   cleanup   Cleanup files of a deleted user
//!   backends  List the registered user backends
//!   scan      Index a user's home directory into the file cache

mod commands;
mod ui;

use std::process;

use anyhow::Result;
use clap::Parser;

use user_cleanup::config::Config;
use user_cleanup::presentation::{Cli, Commands};

use crate::ui::context::UiContext;

fn main() {
    let cli = Cli::parse();

    let (config, warnings) = match Config::discover(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(err) => {
            let ui = UiContext::new(cli.json, cli.verbose, cli.color, &Config::default());
            ui::error::print_error(&err.into(), &ui);
            process::exit(1);
        }
    };
    let config = config.with_env_overrides();
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);

    ui::output::print_config_warnings(&warnings, ui.color);

    if let Err(err) = run(cli.command, &config, &ui) {
        ui::error::print_error(&err, &ui);
        process::exit(1);
    }
}

fn run(command: Commands, config: &Config, ui: &UiContext) -> Result<()> {
    match command {
        Commands::Cleanup {
            user_id,
            user_backend,
            yes,
        } => commands::cleanup::cmd_cleanup(config, ui, &user_id, user_backend, yes).map(|_| ()),
        Commands::Backends => commands::backends::cmd_backends(config, ui),
        Commands::Scan { user_id } => commands::scan::cmd_scan(config, ui, &user_id).map(|_| ()),
    }
}
