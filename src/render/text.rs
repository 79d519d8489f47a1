//! Plain-text line assembly for classified reports.

use crate::model::{CellValue, DoctorReport, ErrorReport, TableReport};

use super::format_cell;

/// Separator between adjacent cells on a line.
const CELL_SEPARATOR: &str = " | ";
/// Short rule printed under the report title.
const TITLE_RULE: &str = "-------------";
/// Width of the rule separating the table header from its body.
const TABLE_RULE_WIDTH: usize = 144;
/// Prefix for entries in the error listing.
const ERROR_BULLET: &str = "  - ";

/// Format every cell of a row at its index.
///
/// Output length equals the cell count, order preserved; an empty row
/// yields an empty vec.
pub fn format_row(cells: &[CellValue]) -> Vec<String> {
    cells
        .iter()
        .enumerate()
        .map(|(position, cell)| format_cell(cell, position))
        .collect()
}

/// Render a classified report as an ordered line sequence.
pub fn render_lines(report: &DoctorReport) -> Vec<String> {
    match report {
        DoctorReport::Table(table) => render_table(table),
        DoctorReport::Errors(errors) => render_errors(errors),
    }
}

fn render_table(report: &TableReport) -> Vec<String> {
    let heading = format_row(&report.header).join(CELL_SEPARATOR);

    let mut lines = vec![
        report.title.clone(),
        TITLE_RULE.to_string(),
        report.summary.clone(),
        String::new(),
        heading,
        "-".repeat(TABLE_RULE_WIDTH),
    ];
    lines.extend(
        report
            .rows
            .iter()
            .map(|row| format_row(row).join(CELL_SEPARATOR)),
    );
    lines.push(String::new());
    lines
}

fn render_errors(report: &ErrorReport) -> Vec<String> {
    let mut lines = vec![
        report.title.clone(),
        TITLE_RULE.to_string(),
        report.message.clone(),
        String::new(),
    ];
    lines.extend(
        report
            .items
            .iter()
            .map(|item| format!("{}{}", ERROR_BULLET, item)),
    );
    lines.push(String::new());
    lines
}
