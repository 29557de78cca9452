//! `ahoy` - project-local command aliases
//!
//! Commands are declared in a `.ahoy.yml` file found by walking up from the
//! working directory. Each one becomes a subcommand that runs its shell
//! template from the config file's directory, with `{{args}}` replaced by
//! whatever followed the subcommand on the command line.
//!
//! Aliases are arbitrary shell code. Only run configs you trust.

pub mod cli;
pub mod config;
pub mod error;
pub mod operations;
pub mod system;

use anyhow::{Result, anyhow};
use cli::{
    GlobalArgs, build_app, completion_names, trailing_args, trailing_completion_request,
};
use config::Config;
use config::locate::{config_dir, locate_config};
use operations::dispatch::{Invocation, run_alias};
use operations::init::{HttpTemplateSource, INIT_COMMAND, run_init};
use std::ffi::OsString;
use system::System;
use tracing::debug;

/// Main entry point for the ahoy library
///
/// `globals` must come from [`cli::parse_global_args`] over the same `argv`.
///
/// # Errors
///
/// Returns `AhoyError` for config, command and init failures, and
/// `clap::Error` when `argv` does not match the registered subcommands.
pub fn run(argv: &[OsString], globals: &GlobalArgs, system: &dyn System) -> Result<()> {
    let config_path = locate_config(system, globals.file.as_deref())?;
    let config = match &config_path {
        Some(path) => Config::load_from_file(system, path)?,
        None => {
            debug!("No config file found; only built-in commands are available");
            Config::default()
        }
    };

    let mut app = build_app(&config);

    if globals.generate_bash_completion {
        for name in completion_names(&app) {
            println!("{name}");
        }
        return Ok(());
    }

    // Aliases take no subcommands, so there is nothing to complete after one
    if trailing_completion_request(argv) {
        return Ok(());
    }

    let matches = app.try_get_matches_from_mut(argv)?;
    let Some((name, sub_matches)) = matches.subcommand() else {
        app.print_help()?;
        return Ok(());
    };

    if let Some(def) = config.commands.get(name) {
        let config_path =
            config_path.ok_or_else(|| anyhow!("Command '{name}' has no config file"))?;
        let invocation = Invocation {
            working_dir: config_dir(&config_path),
            config_path,
            command_name: name.to_owned(),
            args: trailing_args(sub_matches),
        };
        return run_alias(&invocation, def);
    }

    if name == INIT_COMMAND {
        let source = HttpTemplateSource::new()?;
        run_init(system, &source)?;
        println!(
            "example .ahoy.yml downloaded to the current directory. You can customize it to suit your needs!"
        );
        return Ok(());
    }

    Err(anyhow!("Unknown command: {name}"))
}
