//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the report
//! service configuration from a YAML file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::AppConfig;

/// Loads and provides access to the report service configuration.
///
/// The configuration file is a single YAML document:
/// ```text
/// roster_path: ./data/employee_roster.csv
/// bind_address: 127.0.0.1:8080
/// default_headcount: 10
/// page_title: Headcount scenario simulator
/// ```
///
/// # Example
///
/// ```no_run
/// use headcount_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/headcount.yaml").unwrap();
/// println!("Roster: {}", loader.roster_path().display());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown fields (`ConfigParseError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use headcount_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/headcount.yaml")?;
    /// # Ok::<(), headcount_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let config = Self::load_yaml::<AppConfig>(path)?;
        info!(path = %path.display(), roster = %config.roster_path.display(), "Loaded configuration");
        Ok(Self { config })
    }

    /// Loads configuration from `path` if given, otherwise uses the defaults.
    pub fn load_or_default(path: Option<&Path>) -> EngineResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the roster file path.
    pub fn roster_path(&self) -> &PathBuf {
        &self.config.roster_path
    }

    /// Returns the address the HTTP server should bind to.
    pub fn bind_address(&self) -> &str {
        &self.config.bind_address
    }

    /// Returns the headcount used when a request does not choose one.
    pub fn default_headcount(&self) -> usize {
        self.config.default_headcount
    }

    /// Returns the report page heading.
    pub fn page_title(&self) -> &str {
        &self.config.page_title
    }
}
