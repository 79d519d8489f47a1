//! Document-shape classification.
//!
//! Doctor documents come in exactly two shapes: a status table, or an
//! error listing. Classification happens once, up front, producing a
//! [`DoctorReport`] the renderers can consume without re-inspecting the
//! tree. Structural mismatches become explicit [`Error::MalformedDocument`]
//! values rather than panics; well-formed documents are unaffected.

use crate::error::{Error, Result};
use crate::model::{CellValue, DoctorReport, ErrorReport, HtmlNode, TableReport};

/// Classify a parsed Doctor document into one of the two report shapes.
///
/// A document with a `<table>` becomes a [`TableReport`]; one without
/// becomes an [`ErrorReport`] read from the second paragraph.
///
/// # Example
///
/// ```
/// use doctext::{classify_report, DoctorReport, HtmlNode};
///
/// let root = HtmlNode::element(
///     "div",
///     vec![
///         HtmlNode::element_with_text("h1", "Metals Doctor"),
///         HtmlNode::element_with_text("p", "these are the results"),
///     ],
/// );
/// // No table, but also no second paragraph: malformed.
/// assert!(classify_report(&root).is_err());
/// ```
pub fn classify_report(root: &HtmlNode) -> Result<DoctorReport> {
    let title = root
        .find("h1")
        .ok_or_else(|| Error::MalformedDocument("missing <h1> heading".to_string()))?
        .raw
        .clone();

    let notes = root.find_all("p");

    match root.find("table") {
        Some(table) => classify_table(title, &notes, table),
        None => classify_errors(title, &notes),
    }
}

fn classify_table(title: String, notes: &[&HtmlNode], table: &HtmlNode) -> Result<DoctorReport> {
    let summary = notes
        .first()
        .ok_or_else(|| Error::MalformedDocument("missing summary paragraph".to_string()))?
        .raw
        .clone();

    let header_row = table
        .find("thead")
        .and_then(|head| head.first_child())
        .ok_or_else(|| Error::MalformedDocument("table has no header row".to_string()))?;
    let header = cell_values(&header_row.children)?;

    let body = table
        .find("tbody")
        .ok_or_else(|| Error::MalformedDocument("table has no <tbody>".to_string()))?;
    let rows = body
        .children
        .iter()
        .map(|row| cell_values(&row.children))
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "classified table report: {} columns, {} rows",
        header.len(),
        rows.len()
    );

    Ok(DoctorReport::Table(TableReport {
        title,
        summary,
        header,
        rows,
    }))
}

fn classify_errors(title: String, notes: &[&HtmlNode]) -> Result<DoctorReport> {
    let container = notes.get(1).ok_or_else(|| {
        Error::MalformedDocument("error listing needs a second paragraph".to_string())
    })?;
    let [message_node, list_node, ..] = container.children.as_slice() else {
        return Err(Error::MalformedDocument(
            "error paragraph needs a message and a list".to_string(),
        ));
    };

    let message = message_node.to_string();
    let items: Vec<String> = list_node
        .children
        .iter()
        .map(|item| item.raw.clone())
        .collect();

    log::debug!("classified error report: {} items", items.len());

    Ok(DoctorReport::Errors(ErrorReport {
        title,
        message,
        items,
    }))
}

fn cell_values(cells: &[HtmlNode]) -> Result<Vec<CellValue>> {
    cells
        .iter()
        .map(|cell| {
            CellValue::from_cell(cell).ok_or_else(|| {
                Error::MalformedDocument("entity-escaped cell has no nested content".to_string())
            })
        })
        .collect()
}
