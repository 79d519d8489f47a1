//! Classified report types.

use super::HtmlNode;
use serde::{Deserialize, Serialize};

/// A Doctor report, classified into one of the two known document shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DoctorReport {
    /// Status table: summary paragraph plus a header/body data table.
    Table(TableReport),
    /// Error listing: explanation plus a bullet list of problems.
    Errors(ErrorReport),
}

impl DoctorReport {
    /// Report title (the document's heading text).
    pub fn title(&self) -> &str {
        match self {
            DoctorReport::Table(report) => &report.title,
            DoctorReport::Errors(report) => &report.title,
        }
    }
}

/// The status-table shape of a Doctor report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableReport {
    /// Report title
    pub title: String,

    /// Explanatory paragraph shown above the table
    pub summary: String,

    /// Header cells, one per column
    pub header: Vec<CellValue>,

    /// Body rows in document order
    pub rows: Vec<Vec<CellValue>>,
}

impl TableReport {
    /// Number of columns (based on the header row).
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Number of body rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// The error-listing shape of a Doctor report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Report title
    pub title: String,

    /// Error explanation shown above the list
    pub message: String,

    /// Individual problem descriptions
    pub items: Vec<String>,
}

/// The content of one table cell, decided once during classification.
///
/// Entity-escaped cells carry their real text in a nested node; resolving
/// that here means the renderers never re-inspect raw text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellValue {
    /// Plain cell text
    Plain(String),
    /// The inner node of an entity-escaped cell
    EscapedRef(HtmlNode),
}

impl CellValue {
    /// Build a cell value from a cell node. Returns `None` when the cell
    /// is entity-escaped but has no child to descend into.
    pub fn from_cell(cell: &HtmlNode) -> Option<Self> {
        if cell.is_entity_escaped() {
            cell.first_child().cloned().map(CellValue::EscapedRef)
        } else {
            Some(CellValue::Plain(cell.raw.clone()))
        }
    }

    /// Textual content used for measuring and rendering.
    pub fn text_form(&self) -> String {
        match self {
            CellValue::Plain(text) => text.clone(),
            CellValue::EscapedRef(node) => node.to_string(),
        }
    }

    /// Number of literal `&` characters in the serialized form.
    pub fn ampersand_count(&self) -> usize {
        self.text_form().matches('&').count()
    }
}
