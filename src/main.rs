//! # ahoy
//!
//! Runs the commands declared in the nearest `.ahoy.yml`.
//!
//! ```sh
//! ahoy                      # list commands
//! ahoy greet world          # run the `greet` alias with "world" as {{args}}
//! ahoy -f other.yml deploy  # use a specific config file
//! ahoy init                 # download an example .ahoy.yml
//! ```

use ahoy::cli::parse_global_args;
use ahoy::error::AhoyError;
use ahoy::system::RealSystem;
use std::ffi::OsString;
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let argv: Vec<OsString> = std::env::args_os().collect();
    let globals = parse_global_args(&argv);

    let log_level = if globals.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let system = RealSystem::new();
    let Err(err) = ahoy::run(&argv, &globals, &system) else {
        std::process::exit(0);
    };

    if let Some(clap_err) = err.downcast_ref::<clap::Error>() {
        clap_err.exit();
    }

    match err.downcast_ref::<AhoyError>() {
        Some(command_err @ AhoyError::Command { .. }) => {
            debug!("{}", command_err);
            eprintln!();
            std::process::exit(command_err.exit_code());
        }
        Some(ahoy_err) => {
            error!("{}", ahoy_err);
            std::process::exit(ahoy_err.exit_code());
        }
        None => {
            error!("{:#}", err);
            std::process::exit(1);
        }
    }
}
