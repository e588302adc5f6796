//! Roster loading for the Headcount Scenario Engine.
//!
//! This module reads the employee roster CSV, coerces compensation to whole
//! dollars, filters out summary and malformed rows, and memoizes the result
//! per source path for the life of the process.

mod cache;
mod coercion;
mod loader;

pub use cache::cached_roster;
pub use coercion::coerce_comp;
pub use loader::{load_roster, parse_roster, ROSTER_COLUMNS};
