//! Discovery of the `.ahoy.yml` file for the current directory tree

use crate::config::CONFIG_FILE_NAME;
use crate::error::AhoyError;
use crate::system::System;
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Find the config file to use for this invocation
///
/// An explicit path must exist. Without one, the working directory and each of
/// its ancestors up to the filesystem root are checked for `.ahoy.yml`, and
/// the nearest match wins. `Ok(None)` means no file was found anywhere.
///
/// # Errors
///
/// Returns `AhoyError::ConfigNotFound` if `explicit` does not exist, or an
/// error if the working directory cannot be determined.
pub fn locate_config(system: &dyn System, explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if system.exists(path) {
            debug!("Using config file from -f: {}", path.display());
            return Ok(Some(path.to_path_buf()));
        }
        return Err(AhoyError::config_not_found(path).into());
    }

    let start = system
        .current_dir()
        .context("Failed to determine the current working directory")?;
    debug!("Searching for {} from {}", CONFIG_FILE_NAME, start.display());

    Ok(search_upward(system, &start))
}

/// Walk from `start` to the root, returning the first `.ahoy.yml` found
#[must_use]
pub fn search_upward(system: &dyn System, start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if system.is_file(&candidate) {
            debug!("Found config file: {}", candidate.display());
            Some(candidate)
        } else {
            None
        }
    })
}

/// Directory commands from `config_path` run in
///
/// A bare file name such as `custom.yml` has an empty parent, which means
/// the current directory.
#[must_use]
pub fn config_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_of_bare_file_name_is_current_dir() {
        assert_eq!(config_dir(Path::new("custom.yml")), PathBuf::from("."));
    }

    #[test]
    fn config_dir_of_nested_file_is_its_parent() {
        assert_eq!(
            config_dir(Path::new("/srv/app/.ahoy.yml")),
            PathBuf::from("/srv/app")
        );
    }

    #[test]
    fn search_checks_the_root_directory() {
        let system = crate::system::MockSystem::new()
            .with_dir("/a/b")
            .with_file("/.ahoy.yml", b"");
        assert_eq!(
            search_upward(&system, Path::new("/a/b")),
            Some(PathBuf::from("/.ahoy.yml"))
        );
    }
}
