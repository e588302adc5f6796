//! HTTP API module for the Headcount Scenario Engine.
//!
//! This module serves the scenario report page, a JSON scenario endpoint,
//! and the CSV download of the current selection.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ScenarioQuery;
pub use response::{ApiError, ApiErrorResponse, ScenarioResponse};
pub use state::AppState;
