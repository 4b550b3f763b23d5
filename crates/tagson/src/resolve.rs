//! Shape resolution from a parsed forest to a JSON-like value
//!
//! One grouping rule drives everything: siblings are grouped by tag under
//! first-occurrence order, a tag seen once resolves to its single member
//! and a tag seen more than once to an array of its members in document
//! order. Applied to the top-level forest the same rule produces both the
//! wrapping of a lone root and the merging of distinct top-level tags.

use indexmap::IndexMap;

use crate::markup::model::{Document, Element};
use crate::value::{Object, Value};

/// Key holding an element's own text when attributes are also emitted
pub const TEXT_KEY: &str = "textNode";

/// Resolve a document into a value.
///
/// The result is always an object keyed by the distinct top-level tags.
pub fn resolve(document: &Document, attribute_mode: bool) -> Value {
    Value::Object(resolve_siblings(&document.elements, attribute_mode))
}

/// Resolve a single element.
///
/// Shape follows from content: children become an object of grouped child
/// tags, text collapses to a scalar, an empty element becomes `""`. When
/// attribute mode is on and the element carries attributes, they are
/// folded in ahead of any child keys, and text moves under [`TEXT_KEY`].
pub fn resolve_element(element: &Element, attribute_mode: bool) -> Value {
    let attributes = effective_attributes(element, attribute_mode);

    if !element.children.is_empty() {
        let children = resolve_siblings(&element.children, attribute_mode);
        return match attributes {
            Some(attrs) => {
                let mut object = Object::with_capacity(attrs.len() + children.len());
                for (key, value) in attrs {
                    object.insert(key.clone(), value.clone());
                }
                for (key, value) in children {
                    object.insert(key, value);
                }
                Value::Object(object)
            }
            None => Value::Object(children),
        };
    }

    if !element.text.is_empty() {
        return match attributes {
            Some(attrs) => {
                let mut object = attributes_object(attrs);
                object.insert(TEXT_KEY, element.text.clone());
                Value::Object(object)
            }
            None => Value::String(element.text.clone()),
        };
    }

    match attributes {
        Some(attrs) => Value::Object(attributes_object(attrs)),
        None => Value::String(String::new()),
    }
}

/// Group siblings by tag and resolve each group.
///
/// Grouping is by identity, not adjacency: interleaved occurrences of a
/// repeated tag land in one group, positioned where the tag first occurs.
fn resolve_siblings(elements: &[Element], attribute_mode: bool) -> Object {
    let mut groups: IndexMap<&str, Vec<&Element>> = IndexMap::new();
    for element in elements {
        groups.entry(element.tag.as_str()).or_default().push(element);
    }

    let mut object = Object::with_capacity(groups.len());
    for (tag, members) in groups {
        let value = if let [only] = members.as_slice() {
            resolve_element(only, attribute_mode)
        } else {
            Value::Array(
                members
                    .iter()
                    .copied()
                    .map(|member| resolve_element(member, attribute_mode))
                    .collect(),
            )
        };
        object.insert(tag, value);
    }
    object
}

fn effective_attributes(
    element: &Element,
    attribute_mode: bool,
) -> Option<&IndexMap<String, String>> {
    if attribute_mode && !element.attributes.is_empty() {
        Some(&element.attributes)
    } else {
        None
    }
}

fn attributes_object(attributes: &IndexMap<String, String>) -> Object {
    let mut object = Object::with_capacity(attributes.len());
    for (key, value) in attributes {
        object.insert(key.clone(), value.clone());
    }
    object
}
