//! Top-N selection by compensation.
//!
//! The prioritization rule is fixed: highest compensation first, with equal
//! compensation kept in roster order. There is no alternative ordering.

use crate::config::DEFAULT_HEADCOUNT;
use crate::models::{EmployeeRecord, Roster, ScenarioSummary, Selection};

/// Clamps a requested headcount into `[0, total_employees]`.
///
/// # Examples
///
/// ```
/// use headcount_engine::selection::clamp_headcount;
///
/// assert_eq!(clamp_headcount(7, 4), 4);
/// assert_eq!(clamp_headcount(2, 4), 2);
/// ```
pub fn clamp_headcount(requested: usize, total_employees: usize) -> usize {
    requested.min(total_employees)
}

/// Returns the headcount the report starts at: ten, or the whole roster if smaller.
pub fn default_headcount(total_employees: usize) -> usize {
    clamp_headcount(DEFAULT_HEADCOUNT, total_employees)
}

/// Returns the roster ordered by compensation, highest first.
///
/// `slice::sort_by` is a stable sort, so records with equal compensation
/// keep their roster order.
pub fn prioritize(roster: &Roster) -> Vec<&EmployeeRecord> {
    let mut ordered: Vec<&EmployeeRecord> = roster.records().iter().collect();
    ordered.sort_by(|a, b| b.comp_usd.cmp(&a.comp_usd));
    ordered
}

/// Selects the `target_headcount` highest-paid employees and summarizes their cost.
///
/// `target_headcount` is clamped to the roster size; an out-of-range value
/// never fails. A target of zero yields an empty selection with all-zero
/// cost figures.
///
/// # Example
///
/// ```
/// use headcount_engine::models::{EmployeeRecord, Roster};
/// use headcount_engine::selection::select;
///
/// let record = |id: &str, comp_usd| EmployeeRecord {
///     employee_id: id.to_string(),
///     name: String::new(),
///     role: String::new(),
///     department: String::new(),
///     location: String::new(),
///     comp_usd,
/// };
/// let roster = Roster::new(
///     "inline",
///     vec![
///         record("E1", 100000),
///         record("E2", 300000),
///         record("E3", 300000),
///         record("E4", 50000),
///     ],
/// );
///
/// let (selection, summary) = select(&roster, 2);
/// let ids: Vec<&str> = selection.records.iter().map(|r| r.employee_id.as_str()).collect();
/// assert_eq!(ids, vec!["E2", "E3"]);
/// assert_eq!(summary.total_cost, 600000);
/// assert_eq!(summary.average_cost, 300000);
/// assert_eq!(summary.median_cost, 300000);
/// ```
pub fn select(roster: &Roster, target_headcount: usize) -> (Selection, ScenarioSummary) {
    let count = clamp_headcount(target_headcount, roster.len());

    let selection = Selection {
        records: prioritize(roster)
            .into_iter()
            .take(count)
            .cloned()
            .collect(),
    };
    let summary = ScenarioSummary::from_selection(&selection, roster.len());

    (selection, summary)
}
