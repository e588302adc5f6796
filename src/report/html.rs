//! HTML rendering of the scenario report page.
//!
//! The page shows the headcount control, four KPI cards, and either the
//! selected-employee table with a download link or an informational note
//! when nobody is selected. All roster text is escaped before rendering.

use crate::models::{ScenarioSummary, Selection};

use super::export::EXPORT_FILE_NAME;
use super::format::{format_headcount, format_usd};

/// Table headers shown for the selected employees, in column order.
pub const DISPLAY_HEADERS: [&str; 6] = [
    "ID",
    "Name",
    "Title",
    "Department",
    "Location",
    "Compensation (USD)",
];

/// Message shown in place of the table for an empty selection.
pub const EMPTY_SELECTION_MESSAGE: &str = "No employees selected for the current headcount.";

const STYLE: &str = r#"
  body { font-family: Georgia, serif; margin: 24px 40px; color: #111827; }
  .app-title { font-size: 32px; font-weight: 700; color: #A51C30; margin-bottom: 6px; }
  .app-sub { color: #374151; margin: 0 0 12px 0; font-size: 14px; }
  .rule { height: 4px; background: #A51C30; border-radius: 2px; margin: 10px 0 18px 0; }
  .controls { background: #341219; color: #ffffff; padding: 14px; border-radius: 8px; margin-bottom: 18px; }
  .controls button { background: #A51C30; color: #ffffff; border: none; padding: 6px 12px; border-radius: 4px; }
  .kpis { display: flex; gap: 16px; margin-bottom: 18px; }
  .kpi-card { flex: 1; padding: 14px; border-radius: 8px; background: #ffffff; border: 1px solid #e6e6e6; }
  .kpi-label { font-size: 13px; color: #6b7280; margin-bottom: 6px; }
  .kpi-value { font-size: 20px; font-weight: 700; }
  table { border-collapse: collapse; width: 100%; box-shadow: 0 2px 6px rgba(15,23,42,0.04); }
  th, td { text-align: left; padding: 6px 10px; border-bottom: 1px solid #e6e6e6; }
  .info { background: #eff6ff; color: #1e3a8a; padding: 12px; border-radius: 8px; }
  .small-note { color: #6b7280; font-size: 12px; }
"#;

/// Everything the report page displays for one request.
#[derive(Debug, Clone, Copy)]
pub struct ReportView<'a> {
    /// Page heading.
    pub title: &'a str,
    /// Label of the roster the figures were computed from.
    pub roster_source: &'a str,
    /// The headcount actually applied, after clamping.
    pub headcount: usize,
    /// The selected employees.
    pub selection: &'a Selection,
    /// Cost figures for the selection.
    pub summary: &'a ScenarioSummary,
}

/// Escapes text for inclusion in HTML element content.
///
/// Roster text is only ever placed between tags, never inside attributes.
pub fn escape_html(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// Renders the full report page.
pub fn render_report(view: &ReportView<'_>) -> String {
    let summary = view.summary;
    let title = escape_html(view.title);

    let mut page = String::with_capacity(4096 + view.selection.len() * 256);
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str(&format!("<title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n"));
    page.push_str(&format!("<div class=\"app-title\">{title}</div>\n"));
    page.push_str(
        "<div class=\"app-sub\">Set a target headcount and prioritize hires by compensation to see the cost impact.</div>\n",
    );
    page.push_str("<div class=\"rule\"></div>\n");

    page.push_str(&render_controls(view.headcount, summary.total_employees));
    page.push_str(&render_kpis(summary));

    page.push_str("<h3>Selected employees</h3>\n");
    if view.selection.is_empty() {
        page.push_str(&format!("<div class=\"info\">{EMPTY_SELECTION_MESSAGE}</div>\n"));
    } else {
        page.push_str(&render_table(view.selection));
        page.push_str(&format!(
            "<p><a href=\"/export?headcount={}\" download=\"{EXPORT_FILE_NAME}\">Download selected as CSV</a></p>\n",
            view.headcount
        ));
    }

    page.push_str("<hr>\n");
    page.push_str(&format!(
        "<p class=\"small-note\">Roster source: <code>{}</code> &mdash; total employees in roster: {}</p>\n",
        escape_html(view.roster_source),
        summary.total_employees
    ));
    page.push_str("</body>\n</html>\n");
    page
}

fn render_controls(headcount: usize, total_employees: usize) -> String {
    format!(
        "<form class=\"controls\" method=\"get\" action=\"/\">\n\
         <label for=\"headcount\">Target headcount</label>\n\
         <input type=\"range\" id=\"headcount\" name=\"headcount\" min=\"0\" max=\"{total_employees}\" step=\"1\" value=\"{headcount}\" \
         oninput=\"this.nextElementSibling.value = this.value\">\n\
         <output>{headcount}</output>\n\
         <button type=\"submit\">Apply</button>\n\
         <p>Prioritization: <strong>Highest compensation first</strong> (fixed)</p>\n\
         </form>\n"
    )
}

fn render_kpis(summary: &ScenarioSummary) -> String {
    let cards = [
        (
            "Selected headcount",
            format_headcount(summary.selected_count, summary.total_employees),
        ),
        ("Total compensation", format_usd(summary.total_cost)),
        ("Average compensation", format_usd(summary.average_cost.into())),
        ("Median compensation", format_usd(summary.median_cost.into())),
    ];

    let mut html = String::from("<div class=\"kpis\">\n");
    for (label, value) in cards {
        html.push_str(&format!(
            "<div class=\"kpi-card\"><div class=\"kpi-label\">{label}</div><div class=\"kpi-value\">{value}</div></div>\n"
        ));
    }
    html.push_str("</div>\n");
    html
}

fn render_table(selection: &Selection) -> String {
    let mut html = String::from("<table>\n<thead><tr>");
    for header in DISPLAY_HEADERS {
        html.push_str(&format!("<th>{header}</th>"));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for record in &selection.records {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(&record.employee_id),
            escape_html(&record.name),
            escape_html(&record.role),
            escape_html(&record.department),
            escape_html(&record.location),
            format_usd(record.comp_usd.into()),
        ));
    }
    html.push_str("</tbody>\n</table>\n");
    html
}
