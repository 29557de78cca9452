//! Custom error types

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ahoy operations
///
/// Every variant ends the process with exit status 1. They differ only in
/// how `main` presents them.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AhoyError {
    /// A config file was named with `-f` but does not exist
    #[error(
        "An ahoy config file was specified to be at {} but couldn't be found. Check your path.",
        .path.display()
    )]
    ConfigNotFound { path: PathBuf },

    /// The config file exists but is not valid YAML for a `Config`
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// The aliased shell command failed to start or exited non-zero
    #[error("Command error: {message}")]
    Command { message: String },

    /// The built-in `init` command could not fetch or write the template
    #[error("Init error: {message}")]
    Init { message: String },
}

impl AhoyError {
    /// Exit status the process should terminate with
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::ConfigNotFound { .. }
            | Self::Configuration { .. }
            | Self::Command { .. }
            | Self::Init { .. } => 1,
        }
    }

    /// Create a missing-config error
    #[inline]
    pub fn config_not_found<P: Into<PathBuf>>(path: P) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a command error
    #[inline]
    pub fn command<S: Into<String>>(message: S) -> Self {
        Self::Command {
            message: message.into(),
        }
    }

    /// Create an init error
    #[inline]
    pub fn init<S: Into<String>>(message: S) -> Self {
        Self::Init {
            message: message.into(),
        }
    }
}
