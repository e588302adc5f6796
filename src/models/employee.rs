//! Employee record and roster types.
//!
//! This module defines the [`EmployeeRecord`] struct for one admitted row of
//! the roster file, and the [`Roster`] collection that owns them in source
//! order.

use serde::{Deserialize, Serialize};

/// Prefix every admitted employee identifier starts with.
pub const EMPLOYEE_ID_PREFIX: &str = "E";

/// One employee row admitted into the roster.
///
/// Records are created once while loading the roster and never modified
/// afterwards. Field names match the roster file's column headers, so the
/// same struct is used to write the CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique identifier for the employee (e.g., "E0042").
    pub employee_id: String,
    /// The employee's full name.
    pub name: String,
    /// The employee's job title.
    pub role: String,
    /// The department the employee belongs to.
    pub department: String,
    /// The office or region the employee works from.
    pub location: String,
    /// Annual compensation in whole US dollars.
    pub comp_usd: u64,
}

impl EmployeeRecord {
    /// Returns true if `id` looks like an employee identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use headcount_engine::models::EmployeeRecord;
    ///
    /// assert!(EmployeeRecord::is_employee_id("E0001"));
    /// assert!(!EmployeeRecord::is_employee_id("SUMMARY"));
    /// assert!(!EmployeeRecord::is_employee_id(""));
    /// ```
    pub fn is_employee_id(id: &str) -> bool {
        id.starts_with(EMPLOYEE_ID_PREFIX)
    }
}

/// The full, ordered set of valid employee records from one source.
///
/// A `Roster` is built by the roster loader and is read-only from then on;
/// it is shared between requests behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
    source: String,
    records: Vec<EmployeeRecord>,
}

impl Roster {
    /// Creates a roster from already-validated records, preserving their order.
    pub fn new(source: impl Into<String>, records: Vec<EmployeeRecord>) -> Self {
        Self {
            source: source.into(),
            records,
        }
    }

    /// Returns a label for where this roster was loaded from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the records in source-file order.
    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    /// Returns the number of employees in the roster.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no rows survived loading.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
