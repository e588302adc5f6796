//! CSV export of a selection.
//!
//! The export uses the roster's own column names so a downloaded file can be
//! loaded back as a roster.

use csv::Writer;

use crate::error::{EngineError, EngineResult};
use crate::models::Selection;
use crate::roster::ROSTER_COLUMNS;

/// File name offered for the selection download.
pub const EXPORT_FILE_NAME: &str = "selected_employees.csv";

/// MIME type of the selection download.
pub const EXPORT_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// Serializes the selected records as UTF-8 CSV with a header row.
///
/// Columns are `employee_id, name, role, department, location, comp_usd`,
/// in selection order. An empty selection still produces the header row.
///
/// # Example
///
/// ```
/// use headcount_engine::models::Selection;
/// use headcount_engine::report::export_csv;
///
/// let bytes = export_csv(&Selection::default()).unwrap();
/// assert_eq!(
///     String::from_utf8(bytes).unwrap(),
///     "employee_id,name,role,department,location,comp_usd\n"
/// );
/// ```
pub fn export_csv(selection: &Selection) -> EngineResult<Vec<u8>> {
    let mut writer = Writer::from_writer(Vec::new());

    if selection.is_empty() {
        // serialize() emits the header with the first record only.
        writer
            .write_record(ROSTER_COLUMNS)
            .map_err(export_error)?;
    }
    for record in &selection.records {
        writer.serialize(record).map_err(export_error)?;
    }

    writer.into_inner().map_err(|e| EngineError::ExportError {
        message: e.to_string(),
    })
}

fn export_error(err: csv::Error) -> EngineError {
    EngineError::ExportError {
        message: err.to_string(),
    }
}
