//! Response types for the report service.
//!
//! This module defines the JSON scenario response, the error response
//! structures, and the mapping from engine errors to HTTP errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{EmployeeRecord, ScenarioSummary};

/// Body of a successful `/api/scenario` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResponse {
    /// Unique identifier for this computation.
    pub scenario_id: Uuid,
    /// When the scenario was computed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the figures.
    pub engine_version: String,
    /// The headcount the caller asked for, if any.
    pub requested_headcount: Option<i64>,
    /// The headcount applied after defaulting and clamping.
    pub applied_headcount: usize,
    /// Cost figures for the selection.
    pub summary: ScenarioSummary,
    /// The selected employees in priority order.
    pub selection: Vec<EmployeeRecord>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates an error for a headcount that is not an integer.
    pub fn invalid_headcount(message: impl Into<String>) -> Self {
        Self::with_details(
            "INVALID_HEADCOUNT",
            message,
            "The 'headcount' query parameter must be a whole number",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let code = match &error {
            EngineError::RosterNotFound { .. }
            | EngineError::RosterParseError { .. }
            | EngineError::MissingColumn { .. } => "ROSTER_ERROR",
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                "CONFIG_ERROR"
            }
            EngineError::ExportError { .. } => "EXPORT_ERROR",
        };

        ApiErrorResponse {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: ApiError::new(code, error.to_string()),
        }
    }
}
