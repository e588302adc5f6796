//! Scenario models for the Headcount Scenario Engine.
//!
//! This module contains the [`Selection`] produced for a target headcount and
//! the [`ScenarioSummary`] of its cost.

use serde::{Deserialize, Serialize};

use super::EmployeeRecord;

/// The employees chosen for one target headcount.
///
/// Records are ordered by compensation, highest first, with ties kept in
/// roster order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// The selected records in priority order.
    pub records: Vec<EmployeeRecord>,
}

impl Selection {
    /// Returns the number of selected employees.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nobody was selected.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the selected compensation values in priority order.
    pub fn comp_values(&self) -> impl Iterator<Item = u64> + '_ {
        self.records.iter().map(|r| r.comp_usd)
    }
}

/// Aggregate cost statistics for a [`Selection`].
///
/// Average and median are truncated toward zero to whole dollars. The total
/// is a `u128` so it stays exact for any selection of `u64` values. Every
/// monetary field is zero for an empty selection.
///
/// # Example
///
/// ```
/// use headcount_engine::models::ScenarioSummary;
///
/// let summary = ScenarioSummary::empty(25);
/// assert_eq!(summary.selected_count, 0);
/// assert_eq!(summary.total_cost, 0);
/// assert_eq!(summary.total_employees, 25);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    /// Number of employees in the selection.
    pub selected_count: usize,
    /// Number of employees in the roster the selection was drawn from.
    pub total_employees: usize,
    /// Exact sum of selected compensation.
    pub total_cost: u128,
    /// Mean selected compensation, truncated.
    pub average_cost: u64,
    /// Median selected compensation, truncated.
    pub median_cost: u64,
}

impl ScenarioSummary {
    /// Returns the summary of an empty selection from a roster of `total_employees`.
    pub fn empty(total_employees: usize) -> Self {
        Self {
            total_employees,
            ..Self::default()
        }
    }
}
