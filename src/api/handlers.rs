//! HTTP request handlers for the report service.
//!
//! This module contains the handler functions for all endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::report::{export_csv, render_report, ReportView, EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME};
use crate::selection::select;

use super::request::ScenarioQuery;
use super::response::{ApiError, ApiErrorResponse, ScenarioResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(report_handler))
        .route("/api/scenario", get(scenario_handler))
        .route("/export", get(export_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Unwraps the query string or builds the 400 response for it.
fn parse_query(
    query: Result<Query<ScenarioQuery>, QueryRejection>,
    correlation_id: Uuid,
) -> Result<ScenarioQuery, ApiErrorResponse> {
    match query {
        Ok(Query(query)) => Ok(query),
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Invalid scenario query"
            );
            Err(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_headcount(body_text),
            })
        }
    }
}

/// Handler for GET / endpoint.
///
/// Renders the HTML report for the requested (or default) headcount.
async fn report_handler(
    State(state): State<AppState>,
    query: Result<Query<ScenarioQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let query = match parse_query(query, correlation_id) {
        Ok(query) => query,
        Err(err) => return err.into_response(),
    };

    let start_time = Instant::now();
    let headcount = state.resolve_headcount(query.headcount);
    let (selection, summary) = select(state.roster(), headcount);

    let page = render_report(&ReportView {
        title: state.config().page_title(),
        roster_source: state.roster().source(),
        headcount,
        selection: &selection,
        summary: &summary,
    });

    info!(
        correlation_id = %correlation_id,
        headcount,
        selected_count = summary.selected_count,
        total_cost = %summary.total_cost,
        duration_us = start_time.elapsed().as_micros(),
        "Rendered scenario report"
    );
    Html(page).into_response()
}

/// Handler for GET /api/scenario endpoint.
///
/// Returns the selection and its cost summary as JSON.
async fn scenario_handler(
    State(state): State<AppState>,
    query: Result<Query<ScenarioQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing scenario request");

    let query = match parse_query(query, correlation_id) {
        Ok(query) => query,
        Err(err) => return err.into_response(),
    };

    let start_time = Instant::now();
    let headcount = state.resolve_headcount(query.headcount);
    let (selection, summary) = select(state.roster(), headcount);

    info!(
        correlation_id = %correlation_id,
        requested = ?query.headcount,
        headcount,
        selected_count = summary.selected_count,
        total_cost = %summary.total_cost,
        duration_us = start_time.elapsed().as_micros(),
        "Scenario computed"
    );

    let response = ScenarioResponse {
        scenario_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        requested_headcount: query.headcount,
        applied_headcount: headcount,
        summary,
        selection: selection.records,
    };
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for GET /export endpoint.
///
/// Serves the current selection as a CSV attachment.
async fn export_handler(
    State(state): State<AppState>,
    query: Result<Query<ScenarioQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let query = match parse_query(query, correlation_id) {
        Ok(query) => query,
        Err(err) => return err.into_response(),
    };

    let headcount = state.resolve_headcount(query.headcount);
    let (selection, _) = select(state.roster(), headcount);

    match export_csv(&selection) {
        Ok(bytes) => {
            info!(
                correlation_id = %correlation_id,
                headcount,
                bytes = bytes.len(),
                "Exported selection"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, EXPORT_CONTENT_TYPE.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Export failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /health endpoint.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
