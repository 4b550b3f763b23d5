//! Markup data model

use indexmap::IndexMap;

/// A parsed document: an ordered forest of top-level elements.
///
/// The dialect permits several sibling elements at the top level, so a
/// document is a sequence rather than a single root.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub elements: Vec<Element>,
}

/// One parsed markup node.
///
/// `attributes` preserves document order; a repeated key keeps its first
/// position and the last value. `text` is the element's own direct content,
/// trimmed, and empty when absent. Resolution gives `children` precedence
/// over `text` when a document carries both.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Element>,
    pub text: String,
}

impl Element {
    /// Create an element with no attributes, children or text
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
            text: String::new(),
        }
    }
}
