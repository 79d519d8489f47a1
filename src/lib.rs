//! # doctext
//!
//! Render diagnostic-report ("Doctor") HTML trees as aligned fixed-width
//! plain text for a terminal pager or editor preview.
//!
//! Doctor documents come in two shapes: a status table (title, summary
//! paragraph, header/body table) or an error listing (title, explanation,
//! bullet list). This library classifies a parsed tree into one of the two
//! shapes, lays it out as an ordered line sequence with centered columns,
//! and hands the lines to a display surface.
//!
//! ## Quick Start
//!
//! ```
//! use doctext::{doctor_lines, HtmlNode};
//!
//! let root = HtmlNode::element(
//!     "div",
//!     vec![
//!         HtmlNode::element_with_text("h1", "Metals Doctor"),
//!         HtmlNode::element_with_text("p", "intro"),
//!         HtmlNode::element(
//!             "p",
//!             vec![
//!                 HtmlNode::element_with_text("span", "Build import failed"),
//!                 HtmlNode::element(
//!                     "ul",
//!                     vec![HtmlNode::element_with_text("li", "missing jar")],
//!                 ),
//!             ],
//!         ),
//!     ],
//! );
//!
//! let lines = doctor_lines(&root)?;
//! assert_eq!(lines[0], "Metals Doctor");
//! assert!(lines.contains(&"  - missing jar".to_string()));
//! # Ok::<(), doctext::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Two document shapes**: status table and error listing
//! - **Fixed-width layout**: position-dependent column widths, centered cells
//! - **Entity-escaped cells**: nested-node content resolved once at
//!   classification time
//! - **Trait seams**: `Presenter` and `Messenger` keep display and
//!   notification surfaces external
//! - **JSON output**: structured form of the classified report

pub mod classify;
pub mod doctor;
pub mod error;
pub mod model;
pub mod present;
pub mod render;

// Re-export commonly used types
pub use classify::classify_report;
pub use doctor::{run_doctor, ABSENT_DOCUMENT_MESSAGE};
pub use error::{Error, Result};
pub use model::{CellValue, DoctorReport, ErrorReport, HtmlNode, TableReport};
pub use present::{MessageLevel, Messenger, Presenter, PreviewOptions};
pub use render::{format_cell, format_row, render_lines, to_json, JsonFormat};

/// Classify a Doctor document and render it as plain-text lines.
///
/// Convenience wrapper around [`classify_report`] and [`render_lines`] for
/// callers that manage their own display surface.
pub fn doctor_lines(root: &HtmlNode) -> Result<Vec<String>> {
    let report = classify_report(root)?;
    Ok(render_lines(&report))
}

/// Classify a Doctor document and render it as JSON.
pub fn doctor_json(root: &HtmlNode, format: JsonFormat) -> Result<String> {
    let report = classify_report(root)?;
    to_json(&report, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_document() -> HtmlNode {
        HtmlNode::element(
            "div",
            vec![
                HtmlNode::element_with_text("h1", "Metals Doctor"),
                HtmlNode::element_with_text("p", "intro"),
                HtmlNode::element(
                    "p",
                    vec![
                        HtmlNode::element_with_text("span", "Build import failed"),
                        HtmlNode::element(
                            "ul",
                            vec![HtmlNode::element_with_text("li", "bad config")],
                        ),
                    ],
                ),
            ],
        )
    }

    #[test]
    fn test_doctor_lines() {
        let lines = doctor_lines(&error_document()).unwrap();
        assert_eq!(lines[0], "Metals Doctor");
        assert_eq!(lines.last(), Some(&String::new()));
    }

    #[test]
    fn test_doctor_json() {
        let json = doctor_json(&error_document(), JsonFormat::Compact).unwrap();
        assert!(json.contains("\"kind\":\"errors\""));
    }

    #[test]
    fn test_doctor_lines_malformed() {
        let root = HtmlNode::element("div", vec![]);
        assert!(matches!(
            doctor_lines(&root),
            Err(Error::MalformedDocument(_))
        ));
    }
}
