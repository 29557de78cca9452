//! Subcommands built from the loaded configuration

use crate::cli::GlobalArgs;
use crate::config::{CommandDef, Config};
use crate::operations::init::{INIT_COMMAND, INIT_USAGE};
use clap::{Arg, ArgAction, ArgMatches, Command, CommandFactory as _};

/// Id of the positional that collects trailing arguments
const ARGS_ID: &str = "args";

/// Name clap uses for its generated help subcommand
const HELP_COMMAND: &str = "help";

/// Build the full CLI: global flags, one subcommand per alias, then `init`
///
/// Aliases are registered in name order. The built-in `init` and clap's
/// generated `help` are skipped when the config already defines a command
/// with that name.
#[must_use]
pub fn build_app(config: &Config) -> Command {
    let mut app = GlobalArgs::command()
        .subcommand_required(false)
        .disable_help_subcommand(config.commands.contains_key(HELP_COMMAND));

    for (name, def) in &config.commands {
        app = app.subcommand(alias_subcommand(name, def));
    }

    if !config.commands.contains_key(INIT_COMMAND) {
        app = app.subcommand(Command::new(INIT_COMMAND).about(INIT_USAGE));
    }

    app
}

/// Subcommand for a single alias
fn alias_subcommand(name: &str, def: &CommandDef) -> Command {
    let about = if def.usage.is_empty() {
        def.description.clone()
    } else {
        def.usage.clone()
    };

    let mut args = Arg::new(ARGS_ID)
        .value_name("ARGS")
        .num_args(0..)
        .action(ArgAction::Append);

    let mut command = Command::new(name.to_owned()).about(about);
    if !def.description.is_empty() {
        command = command.long_about(def.description.clone());
    }

    if def.skip_flag_parsing {
        args = args.trailing_var_arg(true).allow_hyphen_values(true);
        command = command.disable_help_flag(true);
    }

    if def.hide_help {
        command = command.hide(true).disable_help_flag(true);
    }

    command.arg(args)
}

/// Trailing arguments captured for an alias invocation
#[must_use]
pub fn trailing_args(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>(ARGS_ID)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

/// Every subcommand name, one entry each, for shell completion
///
/// Hidden aliases are included since completion is not a listing.
#[must_use]
pub fn completion_names(app: &Command) -> Vec<String> {
    let mut names: Vec<String> = app
        .get_subcommands()
        .map(|sub| sub.get_name().to_owned())
        .collect();
    if !names.iter().any(|name| name == HELP_COMMAND) {
        names.push(HELP_COMMAND.to_owned());
    }
    names
}
