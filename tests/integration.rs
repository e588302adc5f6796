//! Integration tests for the Headcount Scenario Engine.
//!
//! This test suite drives the HTTP router over the sample roster in
//! `./data/employee_roster.csv` and covers:
//! - Roster loading and summary-row filtering
//! - Default, explicit, zero and out-of-range headcounts
//! - Tie ordering
//! - HTML report contents
//! - CSV export
//! - Error cases

use std::io::Write;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use headcount_engine::api::{create_router, ApiError, AppState, ScenarioResponse};
use headcount_engine::config::ConfigLoader;
use headcount_engine::error::EngineError;
use headcount_engine::roster::{cached_roster, load_roster, parse_roster};

const SAMPLE_ROSTER: &str = "./data/employee_roster.csv";

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/headcount.yaml").expect("Failed to load config");
    let roster = load_roster(config.roster_path()).expect("Failed to load roster");
    AppState::new(Arc::new(roster), config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn get_body(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, body_bytes.to_vec())
}

async fn get_scenario(uri: &str) -> ScenarioResponse {
    let (status, body) = get_body(create_router_for_test(), uri).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

async fn get_page(uri: &str) -> String {
    let (status, body) = get_body(create_router_for_test(), uri).await;
    assert_eq!(status, StatusCode::OK);
    String::from_utf8(body).unwrap()
}

fn ids(response: &ScenarioResponse) -> Vec<&str> {
    response
        .selection
        .iter()
        .map(|r| r.employee_id.as_str())
        .collect()
}

// =============================================================================
// Roster Loading
// =============================================================================

#[test]
fn test_sample_roster_drops_summary_and_unparsable_rows() {
    let roster = load_roster(SAMPLE_ROSTER).unwrap();

    assert_eq!(roster.len(), 11);
    assert!(roster.records().iter().all(|r| r.employee_id.starts_with('E')));
    assert!(!roster.records().iter().any(|r| r.employee_id == "E012"));
    assert!(!roster.records().iter().any(|r| r.employee_id == "SUMMARY"));
}

#[test]
fn test_sample_roster_truncates_and_unquotes() {
    let roster = load_roster(SAMPLE_ROSTER).unwrap();
    let owen = roster
        .records()
        .iter()
        .find(|r| r.employee_id == "E008")
        .unwrap();

    assert_eq!(owen.comp_usd, 128000);
    assert_eq!(owen.role, "Manager, Customer Success");
}

#[test]
fn test_cached_roster_shares_one_load() {
    let first = cached_roster(SAMPLE_ROSTER).unwrap();
    let second = cached_roster(SAMPLE_ROSTER).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_roster_without_comp_column_fails_to_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"employee_id,name,role,department,location,salary\nE1,Ada,Eng,Eng,Boston,1\n")
        .unwrap();

    let err = load_roster(file.path()).unwrap_err();
    assert!(err.is_load_error());
    assert!(matches!(err, EngineError::MissingColumn { ref column, .. } if column == "comp_usd"));
}

#[test]
fn test_summary_row_does_not_affect_aggregates() {
    let csv = "employee_id,name,role,department,location,comp_usd\n\
               E1,Ada,Eng,Eng,Boston,100000\n\
               SUMMARY,,,,,Total: 500000\n";
    let roster = parse_roster(csv.as_bytes(), "inline").unwrap();
    let (_, summary) = headcount_engine::selection::select(&roster, 5);

    assert_eq!(summary.selected_count, 1);
    assert_eq!(summary.total_cost, 100000);
}

// =============================================================================
// Scenario Endpoint
// =============================================================================

#[tokio::test]
async fn test_default_headcount_is_ten() {
    let response = get_scenario("/api/scenario").await;

    assert_eq!(response.requested_headcount, None);
    assert_eq!(response.applied_headcount, 10);
    assert_eq!(response.summary.selected_count, 10);
    assert_eq!(response.summary.total_employees, 11);
    assert_eq!(response.summary.total_cost, 1773500);
    assert_eq!(response.summary.average_cost, 177350);
    assert_eq!(response.summary.median_cost, 165000);
    assert!(!ids(&response).contains(&"E011"));
}

#[tokio::test]
async fn test_top_five() {
    let response = get_scenario("/api/scenario?headcount=5").await;

    assert_eq!(ids(&response), vec!["E001", "E002", "E003", "E004", "E005"]);
    assert_eq!(response.summary.total_cost, 1130000);
    assert_eq!(response.summary.average_cost, 226000);
    assert_eq!(response.summary.median_cost, 210000);
}

#[tokio::test]
async fn test_equal_compensation_keeps_file_order() {
    let response = get_scenario("/api/scenario?headcount=6").await;

    assert_eq!(&ids(&response)[4..], &["E005", "E006"]);
    assert_eq!(response.summary.total_cost, 1295000);
    assert_eq!(response.summary.average_cost, 215833);
    assert_eq!(response.summary.median_cost, 197500);
}

#[tokio::test]
async fn test_zero_headcount_returns_empty_selection() {
    let response = get_scenario("/api/scenario?headcount=0").await;

    assert!(response.selection.is_empty());
    assert_eq!(response.summary.total_cost, 0);
    assert_eq!(response.summary.average_cost, 0);
    assert_eq!(response.summary.median_cost, 0);
}

#[tokio::test]
async fn test_headcount_above_roster_is_clamped() {
    let response = get_scenario("/api/scenario?headcount=500").await;

    assert_eq!(response.requested_headcount, Some(500));
    assert_eq!(response.applied_headcount, 11);
    assert_eq!(response.selection.len(), 11);
    assert_eq!(response.selection[10].employee_id, "E011");
    assert_eq!(response.summary.total_cost, 1845500);
    assert_eq!(response.summary.average_cost, 167772);
    assert_eq!(response.summary.median_cost, 165000);
}

#[tokio::test]
async fn test_negative_headcount_is_clamped_to_zero() {
    let response = get_scenario("/api/scenario?headcount=-3").await;

    assert_eq!(response.applied_headcount, 0);
    assert!(response.selection.is_empty());
}

#[tokio::test]
async fn test_repeated_requests_give_identical_figures() {
    let first = get_scenario("/api/scenario?headcount=7").await;
    let second = get_scenario("/api/scenario?headcount=7").await;

    assert_eq!(first.summary, second.summary);
    assert_eq!(first.selection, second.selection);
    assert_ne!(first.scenario_id, second.scenario_id);
}

// =============================================================================
// Report Page
// =============================================================================

#[tokio::test]
async fn test_report_page_shows_kpis_and_table() {
    let page = get_page("/").await;

    assert!(page.contains("Headcount scenario simulator"));
    assert!(page.contains("10/11"));
    assert!(page.contains("$1,773,500"));
    assert!(page.contains("$177,350"));
    assert!(page.contains("$165,000"));
    assert!(page.contains("<th>Compensation (USD)</th>"));
    assert!(page.contains("Maya Patel"));
    assert!(page.contains("/export?headcount=10"));
    assert!(page.contains("total employees in roster: 11"));
}

#[tokio::test]
async fn test_report_page_empty_selection_message() {
    let page = get_page("/?headcount=0").await;

    assert!(page.contains("No employees selected for the current headcount."));
    assert!(page.contains("0/11"));
    assert!(!page.contains("<table>"));
}

// =============================================================================
// Export
// =============================================================================

#[tokio::test]
async fn test_export_matches_selection() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .uri("/export?headcount=3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .contains("selected_employees.csv")
    );

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "employee_id,name,role,department,location,comp_usd");
    assert_eq!(
        lines[1],
        "E001,Maya Patel,Chief Executive Officer,Executive,Boston,325000"
    );
    assert!(lines[3].starts_with("E003,"));
}

#[tokio::test]
async fn test_export_of_empty_selection_has_header_only() {
    let (status, body) = get_body(create_router_for_test(), "/export?headcount=0").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        String::from_utf8(body).unwrap(),
        "employee_id,name,role,department,location,comp_usd\n"
    );
}

// =============================================================================
// Error Cases
// =============================================================================

#[tokio::test]
async fn test_non_integer_headcount_returns_400() {
    let (status, body) = get_body(create_router_for_test(), "/api/scenario?headcount=many").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ApiError = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.code, "INVALID_HEADCOUNT");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let (status, _) = get_body(create_router_for_test(), "/calculate").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
