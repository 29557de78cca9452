//! YAML configuration loading and parsing

use crate::config::Config;
use crate::error::AhoyError;
use crate::system::System;
use anyhow::Result;
use std::path::Path;
use tracing::{debug, warn};

/// Load and parse YAML configuration from file
///
/// A file that cannot be read is not fatal: a warning is logged and an empty
/// configuration is returned, so built-in commands stay available. A file that
/// reads but does not parse is fatal.
///
/// # Errors
///
/// Returns `AhoyError::Configuration` with the raw YAML error if parsing fails.
pub fn load_config(system: &dyn System, path: &Path) -> Result<Config> {
    let content = match system.read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            warn!(
                "An ahoy config file couldn't be read at {} ({err}). You can create an example one by using 'ahoy init'",
                path.display()
            );
            return Ok(Config::default());
        }
    };

    let config = parse_config(&content)
        .map_err(|err| AhoyError::configuration(format!("{}: {err}", path.display())))?;

    debug!(
        "Loaded {} command(s) from {} (version {:?})",
        config.commands.len(),
        path.display(),
        config.version
    );
    Ok(config)
}

/// Parse YAML text into a `Config`
///
/// Empty or whitespace-only text yields an empty configuration.
///
/// # Errors
///
/// Returns the `serde_yaml` error unchanged.
pub fn parse_config(content: &str) -> Result<Config, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_command() {
        let config = parse_config(
            r#"
version: "2"
commands:
  ps:
    usage: List containers
    description: Runs docker-compose ps for this project
    cmd: docker-compose ps {{args}}
    hide_help: true
    skip_flag_parsing: true
"#,
        )
        .unwrap();

        assert_eq!(config.version, "2");
        let ps = &config.commands["ps"];
        assert_eq!(ps.usage, "List containers");
        assert_eq!(ps.cmd, "docker-compose ps {{args}}");
        assert!(ps.hide_help);
        assert!(ps.skip_flag_parsing);
    }

    #[test]
    fn test_legacy_lowercase_keys() {
        let config = parse_config(
            "commands:\n  raw:\n    cmd: echo\n    hidehelp: true\n    skipflagparsing: true\n",
        )
        .unwrap();
        assert!(config.commands["raw"].hide_help);
        assert!(config.commands["raw"].skip_flag_parsing);
    }

    #[test]
    fn test_missing_fields_default() {
        let config = parse_config("commands:\n  bare: {}\n").unwrap();
        assert_eq!(config.version, "");
        assert_eq!(config.commands["bare"], crate::config::CommandDef::default());
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(parse_config("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(parse_config("commands: [\n").is_err());
        assert!(parse_config("commands:\n  x:\n    hide_help: maybe\n").is_err());
    }
}
