//! Running a configured alias
//!
//! Turns a `CommandDef` plus the invocation's trailing arguments into a shell
//! script and runs it from the config file's directory.

use crate::config::CommandDef;
use crate::error::AhoyError;
use crate::operations::shell::ShellCommand;
use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

/// Placeholder replaced by the space-joined trailing arguments
pub const ARGS_PLACEHOLDER: &str = "{{args}}";

/// Everything a subcommand handler needs about the current run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Directory the command runs in (the config file's directory)
    pub working_dir: PathBuf,

    /// Config file the command was defined in
    pub config_path: PathBuf,

    /// Subcommand name as typed
    pub command_name: String,

    /// Raw trailing arguments after the subcommand name
    pub args: Vec<String>,
}

/// Replace the first `{{args}}` in `template` with `args` joined by spaces
///
/// Later occurrences are left untouched.
#[must_use]
pub fn substitute_args(template: &str, args: &[String]) -> String {
    template.replacen(ARGS_PLACEHOLDER, &args.join(" "), 1)
}

/// Build the shell command an invocation of `def` would run
#[must_use]
pub fn prepare(invocation: &Invocation, def: &CommandDef) -> ShellCommand {
    ShellCommand::new(
        substitute_args(&def.cmd, &invocation.args),
        &invocation.working_dir,
    )
}

/// Run `def` for this invocation, blocking until the shell exits
///
/// # Errors
///
/// Returns `AhoyError::Command` if the shell cannot be started or exits
/// with a non-zero status.
pub fn run_alias(invocation: &Invocation, def: &CommandDef) -> Result<()> {
    let command = prepare(invocation, def);

    info!(
        "===> ahoy {} from {} : {}",
        invocation.command_name,
        invocation.config_path.display(),
        command.script
    );

    let status = command.run().map_err(|err| {
        AhoyError::command(format!(
            "Failed to start '{}': {err}",
            invocation.command_name
        ))
    })?;

    if !status.success() {
        return Err(AhoyError::command(format!(
            "'{}' failed with {status}",
            invocation.command_name
        ))
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_owned()).collect()
    }

    #[test]
    fn test_substitutes_joined_args() {
        assert_eq!(
            substitute_args("echo hello {{args}}", &args(&["big", "world"])),
            "echo hello big world"
        );
    }

    #[test]
    fn test_only_first_placeholder_replaced() {
        assert_eq!(
            substitute_args("echo {{args}} {{args}}", &args(&["x"])),
            "echo x {{args}}"
        );
    }

    #[test]
    fn test_no_args_leaves_empty_string() {
        assert_eq!(substitute_args("ls {{args}}", &[]), "ls ");
    }

    #[test]
    fn test_template_without_placeholder_ignores_args() {
        assert_eq!(substitute_args("make build", &args(&["ignored"])), "make build");
    }

    #[test]
    fn test_prepare_uses_invocation_working_dir() {
        let invocation = Invocation {
            working_dir: PathBuf::from("/srv/project"),
            config_path: PathBuf::from("/srv/project/.ahoy.yml"),
            command_name: "greet".to_owned(),
            args: args(&["world"]),
        };
        let def = CommandDef {
            cmd: "echo hello {{args}}".to_owned(),
            ..CommandDef::default()
        };

        assert_eq!(
            prepare(&invocation, &def),
            ShellCommand::new("echo hello world", "/srv/project")
        );
    }
}
