//! Generic HTML node tree.
//!
//! The document source hands the library an already-parsed tree; this type
//! is the minimal shape the classifier needs: raw text, ordered children,
//! a serialized string form, and tag-based descendant queries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A node in a parsed HTML tree.
///
/// Element nodes carry a tag name and children; text nodes carry raw text
/// and no tag. The raw text of an element is the text content directly
/// inside it, before any child elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlNode {
    /// Tag name for element nodes (`None` for text nodes)
    pub tag: Option<String>,

    /// Raw text content
    pub raw: String,

    /// Child nodes in document order
    pub children: Vec<HtmlNode>,
}

impl HtmlNode {
    /// Create a text node.
    pub fn text(raw: impl Into<String>) -> Self {
        Self {
            tag: None,
            raw: raw.into(),
            children: Vec::new(),
        }
    }

    /// Create an element node with children.
    pub fn element(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.into()),
            raw: String::new(),
            children,
        }
    }

    /// Create an element node whose content is a single piece of text.
    pub fn element_with_text(tag: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            raw: raw.into(),
            children: Vec::new(),
        }
    }

    /// Add a child node.
    pub fn add_child(&mut self, child: HtmlNode) {
        self.children.push(child);
    }

    /// Get the first child, if any.
    pub fn first_child(&self) -> Option<&HtmlNode> {
        self.children.first()
    }

    /// Whether this node's raw text begins with an HTML character-entity
    /// marker, meaning its real text lives in a nested child.
    pub fn is_entity_escaped(&self) -> bool {
        self.raw.starts_with('&')
    }

    /// Find the first descendant with the given tag, depth-first in
    /// document order. The node itself is a candidate.
    pub fn find(&self, tag: &str) -> Option<&HtmlNode> {
        if self.tag.as_deref() == Some(tag) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(tag))
    }

    /// Find all descendants with the given tag, in document order.
    pub fn find_all<'a>(&'a self, tag: &str) -> Vec<&'a HtmlNode> {
        let mut found = Vec::new();
        self.collect_all(tag, &mut found);
        found
    }

    fn collect_all<'a>(&'a self, tag: &str, found: &mut Vec<&'a HtmlNode>) {
        if self.tag.as_deref() == Some(tag) {
            found.push(self);
        }
        for child in &self.children {
            child.collect_all(tag, found);
        }
    }
}

impl fmt::Display for HtmlNode {
    /// Serialized string form: text nodes print their raw text, element
    /// nodes print tag-wrapped raw text and children.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tag {
            Some(ref tag) => {
                write!(f, "<{}>{}", tag, self.raw)?;
                for child in &self.children {
                    write!(f, "{}", child)?;
                }
                write!(f, "</{}>", tag)
            }
            None => write!(f, "{}", self.raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_node_display() {
        let node = HtmlNode::text("hello");
        assert_eq!(node.to_string(), "hello");
    }

    #[test]
    fn test_element_display() {
        let node = HtmlNode::element("p", vec![HtmlNode::text("note")]);
        assert_eq!(node.to_string(), "<p>note</p>");
    }

    #[test]
    fn test_entity_escaped() {
        let mut cell = HtmlNode::element_with_text("td", "&#10003;");
        cell.add_child(HtmlNode::text("OK"));
        assert!(cell.is_entity_escaped());
        assert!(!HtmlNode::element_with_text("td", "scala").is_entity_escaped());
    }

    #[test]
    fn test_find() {
        let root = HtmlNode::element(
            "div",
            vec![
                HtmlNode::element_with_text("h1", "Doctor"),
                HtmlNode::element_with_text("p", "first"),
                HtmlNode::element_with_text("p", "second"),
            ],
        );

        assert_eq!(root.find("h1").map(|n| n.raw.as_str()), Some("Doctor"));
        assert!(root.find("table").is_none());
    }

    #[test]
    fn test_find_all_document_order() {
        let root = HtmlNode::element(
            "div",
            vec![
                HtmlNode::element_with_text("p", "first"),
                HtmlNode::element("div", vec![HtmlNode::element_with_text("p", "second")]),
            ],
        );

        let paragraphs = root.find_all("p");
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].raw, "first");
        assert_eq!(paragraphs[1].raw, "second");
    }
}
