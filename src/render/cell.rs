//! Fixed-width cell formatting.
//!
//! Every cell is centered into a column whose width depends on the cell's
//! position and on whether it came from an entity-escaped node. The widths
//! are a fixed policy, exposed through [`target_width`] so the policy is
//! testable independent of traversal order.

use crate::model::CellValue;

/// Width of the first column when it holds plain text.
const FIRST_PLAIN_WIDTH: usize = 22;
/// Width of any other plain-text column.
const PLAIN_WIDTH: usize = 18;
/// Width of an escaped-cell column whose serialized form has more than one `&`.
const ESCAPED_MULTI_AMP_WIDTH: usize = 16;
/// Width of any other escaped-cell column.
const ESCAPED_WIDTH: usize = 15;

/// Target column width for a cell at the given zero-based position.
pub fn target_width(value: &CellValue, position: usize) -> usize {
    match value {
        CellValue::Plain(_) if position == 0 => FIRST_PLAIN_WIDTH,
        CellValue::Plain(_) => PLAIN_WIDTH,
        CellValue::EscapedRef(_) if value.ampersand_count() > 1 => ESCAPED_MULTI_AMP_WIDTH,
        CellValue::EscapedRef(_) => ESCAPED_WIDTH,
    }
}

/// Center a cell's text within its target width.
///
/// Text wider than the column gets exactly one space on either side, never
/// truncation; the column comes out narrower than intended but unbroken.
/// Only the first embedded newline is collapsed to a space (a documented
/// quirk of the format).
pub fn format_cell(value: &CellValue, position: usize) -> String {
    let text = value.text_form().replacen('\n', " ", 1);
    pad_centered(&text, target_width(value, position))
}

fn pad_centered(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return format!(" {} ", text);
    }

    let needed = width - len;
    // leading half rounds up
    let pre = needed.div_ceil(2);
    let post = needed - pre;
    format!("{}{}{}", " ".repeat(pre), text, " ".repeat(post))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HtmlNode;

    fn plain(text: &str) -> CellValue {
        CellValue::Plain(text.to_string())
    }

    fn escaped(text: &str) -> CellValue {
        CellValue::EscapedRef(HtmlNode::text(text))
    }

    #[test]
    fn test_width_policy() {
        assert_eq!(target_width(&plain("anything"), 0), 22);
        assert_eq!(target_width(&plain("anything"), 3), 18);
        assert_eq!(target_width(&escaped("& and &"), 2), 16);
        assert_eq!(target_width(&escaped("OK"), 2), 15);
    }

    #[test]
    fn test_first_plain_cell_width() {
        let out = format_cell(&plain("Build target"), 0);
        assert_eq!(out.chars().count(), 22);
        assert!(out.contains("Build target"));
    }

    #[test]
    fn test_other_plain_cell_width() {
        for position in 1..4 {
            let out = format_cell(&plain("OK"), position);
            assert_eq!(out.chars().count(), 18);
        }
    }

    #[test]
    fn test_escaped_cell_widths() {
        assert_eq!(format_cell(&escaped("OK"), 1).chars().count(), 15);
        // Serialized form with two literal ampersands gets the wider column
        assert_eq!(format_cell(&escaped("A && B"), 1).chars().count(), 16);
    }

    #[test]
    fn test_escaped_width_ignores_position() {
        assert_eq!(format_cell(&escaped("OK"), 0).chars().count(), 15);
    }

    #[test]
    fn test_centering_split() {
        // width 18, text length 3: 15 spaces split 8 + 7
        let out = format_cell(&plain("abc"), 1);
        assert_eq!(out, format!("{}abc{}", " ".repeat(8), " ".repeat(7)));
    }

    #[test]
    fn test_even_split() {
        // width 18, text length 4: 14 spaces split 7 + 7
        let out = format_cell(&plain("abcd"), 1);
        assert_eq!(out, format!("{}abcd{}", " ".repeat(7), " ".repeat(7)));
    }

    #[test]
    fn test_overflow_keeps_single_spaces() {
        let long = "a-cell-value-much-longer-than-any-column";
        let out = format_cell(&plain(long), 1);
        assert_eq!(out, format!(" {} ", long));
    }

    #[test]
    fn test_exact_width_counts_as_overflow() {
        let text = "x".repeat(18);
        let out = format_cell(&plain(&text), 1);
        assert_eq!(out, format!(" {} ", text));
    }

    #[test]
    fn test_only_first_newline_collapsed() {
        let out = format_cell(&plain("a\nb\nc"), 1);
        assert!(out.contains("a b\nc"));
    }
}
