//! Configuration types for the report service.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from the YAML configuration file.

use serde::Deserialize;
use std::path::PathBuf;

/// Default location of the roster file, relative to the working directory.
pub const DEFAULT_ROSTER_PATH: &str = "./data/employee_roster.csv";

/// Default socket address the report service binds to.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

/// Default number of employees selected when no headcount is requested.
pub const DEFAULT_HEADCOUNT: usize = 10;

/// Default heading shown on the report page.
pub const DEFAULT_PAGE_TITLE: &str = "Headcount scenario simulator";

/// Report service configuration.
///
/// Every field is optional in the YAML file; missing fields fall back to
/// the `DEFAULT_*` constants in this module.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Path to the roster CSV file.
    pub roster_path: PathBuf,
    /// Socket address the HTTP server listens on.
    pub bind_address: String,
    /// Headcount selected when a request does not specify one.
    pub default_headcount: usize,
    /// Heading shown on the report page.
    pub page_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            roster_path: PathBuf::from(DEFAULT_ROSTER_PATH),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            default_headcount: DEFAULT_HEADCOUNT,
            page_title: DEFAULT_PAGE_TITLE.to_string(),
        }
    }
}
