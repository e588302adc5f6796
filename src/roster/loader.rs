//! Roster loading functionality.
//!
//! Reads a comma-separated roster, coerces compensation, and drops every row
//! that is not an employee (wrong identifier or missing compensation).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeRecord, Roster};

use super::coercion::coerce_comp;

/// Columns every roster file must carry, in export order.
pub const ROSTER_COLUMNS: [&str; 6] = [
    "employee_id",
    "name",
    "role",
    "department",
    "location",
    "comp_usd",
];

/// Positions of the required columns within a roster file's header.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    employee_id: usize,
    name: usize,
    role: usize,
    department: usize,
    location: usize,
    comp_usd: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord, source: &str) -> EngineResult<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h.trim() == column)
                .ok_or_else(|| EngineError::MissingColumn {
                    path: source.to_string(),
                    column: column.to_string(),
                })
        };

        // comp_usd first so a file lacking it reports that column.
        let comp_usd = find("comp_usd")?;
        Ok(Self {
            employee_id: find("employee_id")?,
            name: find("name")?,
            role: find("role")?,
            department: find("department")?,
            location: find("location")?,
            comp_usd,
        })
    }
}

/// Loads the roster from a CSV file on disk.
///
/// # Returns
///
/// Returns the admitted records in file order, or an error if:
/// - The file cannot be opened (`RosterNotFound`)
/// - The file is not valid CSV or UTF-8 (`RosterParseError`)
/// - A required column is absent (`MissingColumn`)
///
/// A roster where every row was dropped is valid and comes back empty.
///
/// # Example
///
/// ```no_run
/// use headcount_engine::roster::load_roster;
///
/// let roster = load_roster("./data/employee_roster.csv")?;
/// println!("{} employees", roster.len());
/// # Ok::<(), headcount_engine::error::EngineError>(())
/// ```
pub fn load_roster<P: AsRef<Path>>(path: P) -> EngineResult<Roster> {
    let path = path.as_ref();
    let source = path.display().to_string();

    let file = File::open(path).map_err(|_| EngineError::RosterNotFound {
        path: source.clone(),
    })?;

    parse_roster(file, &source)
}

/// Parses a roster from any reader; `source` labels errors and the result.
///
/// Rows are admitted when their `employee_id` starts with `"E"` and their
/// `comp_usd` coerces to a number. Rows may have fewer or more fields than
/// the header; absent fields read as empty.
pub fn parse_roster<R: Read>(reader: R, source: &str) -> EngineResult<Roster> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| EngineError::RosterParseError {
            path: source.to_string(),
            message: e.to_string(),
        })?
        .clone();
    let columns = ColumnIndex::from_headers(&headers, source)?;

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for row in reader.records() {
        let row = row.map_err(|e| EngineError::RosterParseError {
            path: source.to_string(),
            message: e.to_string(),
        })?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        match admit_row(&row, &columns) {
            Some(record) => records.push(record),
            None => {
                dropped += 1;
                debug!(
                    source = %source,
                    line,
                    employee_id = %field(&row, columns.employee_id),
                    comp_usd = %field(&row, columns.comp_usd),
                    "Skipping non-employee roster row"
                );
            }
        }
    }

    info!(
        source = %source,
        admitted = records.len(),
        dropped,
        "Loaded roster"
    );

    Ok(Roster::new(source, records))
}

/// Builds a record from a row, or `None` if the row is not an employee.
fn admit_row(row: &StringRecord, columns: &ColumnIndex) -> Option<EmployeeRecord> {
    let employee_id = field(row, columns.employee_id);
    if !EmployeeRecord::is_employee_id(employee_id) {
        return None;
    }
    let comp_usd = coerce_comp(field(row, columns.comp_usd))?;

    Some(EmployeeRecord {
        employee_id: employee_id.to_string(),
        name: field(row, columns.name).to_string(),
        role: field(row, columns.role).to_string(),
        department: field(row, columns.department).to_string(),
        location: field(row, columns.location).to_string(),
        comp_usd,
    })
}

fn field(row: &StringRecord, index: usize) -> &str {
    row.get(index).unwrap_or("")
}
