//! Cost statistics over a selection.
//!
//! Sums are exact. Mean and median are truncated toward zero to whole
//! dollars, matching the figures the report has always shown.

use crate::models::{ScenarioSummary, Selection};

/// Returns the truncated median of `values`, or 0 when empty.
///
/// For an even count the two middle values are averaged and the result
/// truncated.
///
/// # Examples
///
/// ```
/// use headcount_engine::selection::median_comp;
///
/// assert_eq!(median_comp(&[300, 100, 200]), 200);
/// assert_eq!(median_comp(&[100, 201]), 150);
/// assert_eq!(median_comp(&[]), 0);
/// ```
pub fn median_comp(values: &[u64]) -> u64 {
    if values.is_empty() {
        return 0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        let pair = u128::from(sorted[mid - 1]) + u128::from(sorted[mid]);
        // Mean of two u64 values always fits back into u64.
        (pair / 2) as u64
    }
}

impl ScenarioSummary {
    /// Computes the summary of `selection`, drawn from `total_employees`.
    ///
    /// # Example
    ///
    /// ```
    /// use headcount_engine::models::{EmployeeRecord, ScenarioSummary, Selection};
    ///
    /// let record = |id: &str, comp_usd| EmployeeRecord {
    ///     employee_id: id.to_string(),
    ///     name: String::new(),
    ///     role: String::new(),
    ///     department: String::new(),
    ///     location: String::new(),
    ///     comp_usd,
    /// };
    /// let selection = Selection {
    ///     records: vec![record("E1", 300), record("E2", 100)],
    /// };
    ///
    /// let summary = ScenarioSummary::from_selection(&selection, 5);
    /// assert_eq!(summary.total_cost, 400);
    /// assert_eq!(summary.average_cost, 200);
    /// assert_eq!(summary.median_cost, 200);
    /// ```
    pub fn from_selection(selection: &Selection, total_employees: usize) -> Self {
        if selection.is_empty() {
            return Self::empty(total_employees);
        }

        let values: Vec<u64> = selection.comp_values().collect();
        let total: u128 = values.iter().map(|&v| u128::from(v)).sum();
        let count = values.len() as u128;

        Self {
            selected_count: values.len(),
            total_employees,
            total_cost: total,
            average_cost: (total / count) as u64,
            median_cost: median_comp(&values),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmployeeRecord;

    fn selection_of(values: &[u64]) -> Selection {
        Selection {
            records: values
                .iter()
                .enumerate()
                .map(|(i, &comp_usd)| EmployeeRecord {
                    employee_id: format!("E{}", i + 1),
                    name: String::new(),
                    role: String::new(),
                    department: String::new(),
                    location: String::new(),
                    comp_usd,
                })
                .collect(),
        }
    }

    #[test]
    fn test_median_odd_count() {
        assert_eq!(median_comp(&[5, 1, 3]), 3);
    }

    #[test]
    fn test_median_even_count_truncates() {
        assert_eq!(median_comp(&[1, 2]), 1);
        assert_eq!(median_comp(&[100000, 100001, 50000, 300000]), 100000);
    }

    #[test]
    fn test_median_large_values_do_not_overflow() {
        assert_eq!(median_comp(&[u64::MAX, u64::MAX]), u64::MAX);
    }

    #[test]
    fn test_empty_selection_is_all_zero() {
        let summary = ScenarioSummary::from_selection(&Selection::default(), 12);

        assert_eq!(summary.selected_count, 0);
        assert_eq!(summary.total_employees, 12);
        assert_eq!(summary.total_cost, 0);
        assert_eq!(summary.average_cost, 0);
        assert_eq!(summary.median_cost, 0);
    }

    #[test]
    fn test_total_beyond_u64_is_exact() {
        let big = 10_000_000_000_000_000_000u64;
        let summary = ScenarioSummary::from_selection(&selection_of(&[big, big]), 2);

        assert_eq!(summary.total_cost, 20_000_000_000_000_000_000u128);
        assert!(summary.total_cost > u128::from(u64::MAX));
        assert_eq!(summary.average_cost, big);
        assert_eq!(u128::from(summary.average_cost), summary.total_cost / 2);
    }

    #[test]
    fn test_average_truncates() {
        let summary = ScenarioSummary::from_selection(&selection_of(&[100, 100, 101]), 3);

        assert_eq!(summary.total_cost, 301);
        assert_eq!(summary.average_cost, 100);
    }

    #[test]
    fn test_single_record() {
        let summary = ScenarioSummary::from_selection(&selection_of(&[87654]), 1);

        assert_eq!(summary.total_cost, 87654);
        assert_eq!(summary.average_cost, 87654);
        assert_eq!(summary.median_cost, 87654);
    }
}
