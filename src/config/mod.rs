//! Configuration management module
//!
//! Handles discovery of `.ahoy.yml` and parsing it into command definitions

pub mod locate;
pub mod yaml;

use crate::system::System;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".ahoy.yml";

/// Main configuration structure
///
/// `commands` is ordered by name, which is the order subcommands are
/// registered and listed in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Config format version, informational only
    pub version: String,

    /// Command aliases keyed by subcommand name
    pub commands: BTreeMap<String, CommandDef>,
}

/// A single command alias
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CommandDef {
    /// Long help text
    pub description: String,

    /// One-line summary shown in the command listing
    pub usage: String,

    /// Shell template; `{{args}}` is replaced by the trailing arguments
    pub cmd: String,

    /// Hide the command from help listings
    #[serde(alias = "hidehelp")]
    pub hide_help: bool,

    /// Forward every trailing token verbatim, including ones that look like flags
    #[serde(alias = "skipflagparsing")]
    pub skip_flag_parsing: bool,
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file(system: &dyn System, path: &Path) -> anyhow::Result<Self> {
        yaml::load_config(system, path)
    }
}
