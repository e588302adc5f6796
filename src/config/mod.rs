//! Configuration loading for the Headcount Scenario Engine.
//!
//! This module loads the report service settings (roster location, bind
//! address, default headcount) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use headcount_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/headcount.yaml").unwrap();
//! println!("Serving on {}", config.bind_address());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, DEFAULT_BIND_ADDRESS, DEFAULT_HEADCOUNT, DEFAULT_PAGE_TITLE, DEFAULT_ROSTER_PATH,
};
