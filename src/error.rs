//! Error types for the Headcount Scenario Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can stop the engine from producing a report.
//! Row-level coercion failures are not errors: those rows are skipped while
//! loading the roster.

use thiserror::Error;

/// The main error type for the Headcount Scenario Engine.
///
/// All fallible operations in the engine return this error type. The
/// roster variants (`RosterNotFound`, `RosterParseError`, `MissingColumn`)
/// are load errors: they are raised once at startup and halt the service.
///
/// # Example
///
/// ```
/// use headcount_engine::error::EngineError;
///
/// let error = EngineError::MissingColumn {
///     path: "roster.csv".to_string(),
///     column: "comp_usd".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Roster 'roster.csv' is missing required column 'comp_usd'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The roster source could not be opened or read.
    #[error("Roster file not readable: {path}")]
    RosterNotFound {
        /// The path that could not be read.
        path: String,
    },

    /// The roster source was not valid comma-separated data.
    #[error("Failed to parse roster '{path}': {message}")]
    RosterParseError {
        /// The roster source that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A required roster column was absent from the header row.
    #[error("Roster '{path}' is missing required column '{column}'")]
    MissingColumn {
        /// The roster source.
        path: String,
        /// The name of the missing column.
        column: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The selection could not be serialized for download.
    #[error("Export error: {message}")]
    ExportError {
        /// A description of the export failure.
        message: String,
    },
}

impl EngineError {
    /// Returns true if this error was raised while loading the roster.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            EngineError::RosterNotFound { .. }
                | EngineError::RosterParseError { .. }
                | EngineError::MissingColumn { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
