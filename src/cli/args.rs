use clap::builder::FalseyValueParser;
use clap::{CommandFactory as _, FromArgMatches as _, Parser};
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// Environment variable that turns on verbose output
pub const VERBOSE_ENV: &str = "AHOY_VERBOSE";

/// Flag shell completion hooks append to the command line
pub const COMPLETION_FLAG: &str = "--generate-bash-completion";

/// Global flags for ahoy
///
/// Subcommands are not part of this struct; they come from the config file
/// and are attached at runtime by [`crate::cli::build_app`].
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "ahoy")]
#[command(about = "Run the project commands defined in the nearest .ahoy.yml")]
#[command(long_about = None)]
#[command(version)]
pub struct GlobalArgs {
    /// Use a specific ahoy file
    #[arg(short = 'f', value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output extra details like the commands to be run
    ///
    /// Any value other than a falsey one (`0`, `false`, `no`, `off`, empty)
    /// in the environment turns this on.
    #[arg(long, env = VERBOSE_ENV, value_parser = FalseyValueParser::new())]
    pub verbose: bool,

    /// Print subcommand names for shell completion
    #[arg(long = "generate-bash-completion", hide = true)]
    pub generate_bash_completion: bool,
}

/// Read only the global flags from `argv`
///
/// Runs before the config is loaded, so subcommands are not known yet.
/// Everything after the first positional is treated as an opaque subcommand,
/// and unknown or malformed input is ignored here; the full parse reports it.
#[must_use]
pub fn parse_global_args<I, T>(argv: I) -> GlobalArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    GlobalArgs::command()
        .ignore_errors(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .allow_external_subcommands(true)
        .try_get_matches_from(argv)
        .ok()
        .and_then(|matches| GlobalArgs::from_arg_matches(&matches).ok())
        .unwrap_or_default()
}

/// Whether the completion flag was appended after a subcommand
///
/// Completion hooks ask about the word being typed by putting the flag last.
/// Before a subcommand it is a global flag and shows up in
/// [`GlobalArgs::generate_bash_completion`] instead, so check that first:
/// the value of `-f` is indistinguishable from a subcommand here.
#[must_use]
pub fn trailing_completion_request<S: AsRef<OsStr>>(argv: &[S]) -> bool {
    match argv.split_last() {
        Some((last, rest)) => {
            last.as_ref() == OsStr::new(COMPLETION_FLAG)
                && rest
                    .iter()
                    .skip(1)
                    .any(|arg| !arg.as_ref().to_string_lossy().starts_with('-'))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_file_flag_before_subcommand() {
        let args = parse_global_args(["ahoy", "-f", "custom.yml", "greet", "world"]);
        assert_eq!(args.file, Some(PathBuf::from("custom.yml")));
        assert!(!args.generate_bash_completion);
    }

    #[test]
    fn test_flags_after_subcommand_belong_to_it() {
        let args = parse_global_args(["ahoy", "greet", "-f", "other.yml"]);
        assert_eq!(args.file, None);
    }

    #[test]
    fn test_help_request_does_not_abort_bootstrap() {
        let args = parse_global_args(["ahoy", "--help"]);
        assert_eq!(args.file, None);
    }

    #[test]
    fn test_trailing_completion_after_subcommand() {
        assert!(trailing_completion_request(&["ahoy", "greet", COMPLETION_FLAG]));
        assert!(!trailing_completion_request(&["ahoy", COMPLETION_FLAG]));
        assert!(!trailing_completion_request(&["ahoy", "greet", "world"]));
        assert!(!trailing_completion_request::<&str>(&[]));
    }

    #[test]
    fn test_completion_flag() {
        let args = parse_global_args(["ahoy", "--generate-bash-completion"]);
        assert!(args.generate_bash_completion);
    }
}
