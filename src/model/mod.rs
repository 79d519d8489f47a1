//! Data model: the generic HTML node tree and the classified report types.

mod node;
mod report;

pub use node::HtmlNode;
pub use report::{CellValue, DoctorReport, ErrorReport, TableReport};
