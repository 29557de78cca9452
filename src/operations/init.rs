//! Built-in `init` command
//!
//! Downloads the example config into the current directory.

use crate::config::CONFIG_FILE_NAME;
use crate::error::AhoyError;
use crate::system::System;
use anyhow::{Context as _, Result};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

/// Where the example config is fetched from
pub const TEMPLATE_URL: &str =
    "https://raw.githubusercontent.com/devinci-code/ahoy/master/examples/examples.ahoy.yml";

/// Name of the built-in subcommand
pub const INIT_COMMAND: &str = "init";

/// Help line for the built-in subcommand
pub const INIT_USAGE: &str = "Initialize a new .ahoy.yml config file in the current directory.";

/// Source of the example config bytes
pub trait TemplateSource {
    /// Fetch the document at `url`
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Fetches templates over HTTP with a blocking client
#[derive(Debug)]
pub struct HttpTemplateSource {
    client: reqwest::blocking::Client,
}

impl HttpTemplateSource {
    /// Create a client with a bounded request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("ahoy/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl TemplateSource for HttpTemplateSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!("Fetching {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Request to {url} failed"))?
            .error_for_status()
            .with_context(|| format!("Server rejected request to {url}"))?;
        let body = response
            .bytes()
            .with_context(|| format!("Failed to read response body from {url}"))?;
        Ok(body.to_vec())
    }
}

/// Fetch the example config and write it to `.ahoy.yml` in the current directory
///
/// An existing `.ahoy.yml` there is overwritten.
///
/// # Errors
///
/// Returns `AhoyError::Init` if the fetch or the write fails.
pub fn run_init(system: &dyn System, source: &dyn TemplateSource) -> Result<PathBuf> {
    let dir = system
        .current_dir()
        .map_err(|err| AhoyError::init(format!("Cannot determine current directory: {err}")))?;
    let target = dir.join(CONFIG_FILE_NAME);

    let contents = source
        .fetch(TEMPLATE_URL)
        .map_err(|err| AhoyError::init(format!("{err:#}")))?;

    if system.exists(&target) {
        warn!("Overwriting existing {}", target.display());
    }

    system.write(&target, &contents).map_err(|err| {
        AhoyError::init(format!("Failed to write {}: {err}", target.display()))
    })?;

    Ok(target)
}
