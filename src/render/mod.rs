//! Rendering module: report to aligned plain text or JSON.

mod cell;
mod json;
mod text;

pub use cell::{format_cell, target_width};
pub use json::{to_json, JsonFormat};
pub use text::{format_row, render_lines};
