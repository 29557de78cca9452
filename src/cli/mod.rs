//! Command-line interface module
//!
//! Global flag parsing and registration of config-defined subcommands

pub mod args;
pub mod commands;

pub use args::*;
pub use commands::*;
