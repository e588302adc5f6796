//! Application state for the report service.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::models::Roster;
use crate::selection::clamp_headcount;

/// Shared application state.
///
/// Holds the read-only roster loaded at startup and the service
/// configuration. Cloning is cheap; every clone shares the same roster.
#[derive(Clone)]
pub struct AppState {
    /// The roster every scenario is computed from.
    roster: Arc<Roster>,
    /// The loaded service configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state from a loaded roster and configuration.
    pub fn new(roster: Arc<Roster>, config: ConfigLoader) -> Self {
        Self {
            roster,
            config: Arc::new(config),
        }
    }

    /// Returns the shared roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Resolves a requested headcount to the one actually applied.
    ///
    /// No request value selects the configured default; negative values
    /// become zero and values above the roster size become the roster size.
    pub fn resolve_headcount(&self, requested: Option<i64>) -> usize {
        let total = self.roster.len();
        match requested {
            None => clamp_headcount(self.config.default_headcount(), total),
            Some(n) => clamp_headcount(usize::try_from(n.max(0)).unwrap_or(usize::MAX), total),
        }
    }
}
