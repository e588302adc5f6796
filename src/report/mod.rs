//! Presentation of scenario results.
//!
//! This module turns a selection and its summary into the things a user
//! sees: currency-formatted figures, the HTML report page, and the CSV
//! download.

mod export;
mod format;
mod html;

pub use export::{export_csv, EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME};
pub use format::{format_headcount, format_usd};
pub use html::{escape_html, render_report, ReportView, DISPLAY_HEADERS, EMPTY_SELECTION_MESSAGE};
