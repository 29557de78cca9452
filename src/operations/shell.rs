//! Shell execution with inherited standard streams
//!
//! Scripts run here come straight from the config file and the command line.
//! Nothing is escaped or sandboxed: running an alias is running arbitrary
//! shell code with the user's privileges.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// A shell script bound to the directory it runs in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    pub script: String,
    pub working_dir: PathBuf,
}

impl ShellCommand {
    #[must_use]
    pub fn new<S: Into<String>, P: AsRef<Path>>(script: S, working_dir: P) -> Self {
        Self {
            script: script.into(),
            working_dir: working_dir.as_ref().to_path_buf(),
        }
    }

    /// Run the script and block until it exits
    ///
    /// stdin, stdout and stderr are the parent's own; nothing is captured.
    ///
    /// # Errors
    ///
    /// Returns the spawn error if the shell could not be started.
    pub fn run(&self) -> io::Result<ExitStatus> {
        let (shell, flag) = get_shell_command();
        Command::new(shell)
            .arg(flag)
            .arg(&self.script)
            .current_dir(&self.working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
    }
}

/// Get the shell interpreter for the current platform
fn get_shell_command() -> (&'static str, &'static str) {
    if cfg!(target_os = "windows") {
        return ("cmd", "/C");
    } else {
        return ("bash", "-c");
    }
}
