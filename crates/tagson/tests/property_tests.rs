//! Property-based tests for the parser and the shape resolver
//!
//! These verify:
//! 1. The parser reconstructs any rendered forest exactly.
//! 2. Resolved key order equals first-occurrence tag order, and group
//!    cardinality alone decides array shape.
//! 3. Disabling attribute mode never changes which groups are arrays.

use proptest::prelude::*;
use std::collections::BTreeMap;
use tagson::{from_str, normalize, resolve, Document, Element, Value};

fn render_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    for (key, value) in &element.attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out.push('>');
    if element.children.is_empty() {
        out.push_str(&element.text);
    } else {
        for child in &element.children {
            render_element(child, out);
        }
    }
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

fn render_forest(elements: &[Element]) -> String {
    let mut out = String::new();
    for element in elements {
        render_element(element, &mut out);
    }
    out
}

fn arb_tag() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

fn arb_attributes() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[a-z]{1,6}", "[a-zA-Z0-9]{0,8}", 0..3)
}

fn build_element(
    tag: String,
    attributes: BTreeMap<String, String>,
    children: Vec<Element>,
    text: String,
) -> Element {
    let mut element = Element::new(tag);
    for (key, value) in attributes {
        element.attributes.insert(key, value);
    }
    element.children = children;
    element.text = text;
    element
}

fn arb_element() -> impl Strategy<Value = Element> {
    let leaf = (arb_tag(), arb_attributes(), "[a-zA-Z0-9]{0,10}").prop_map(
        |(tag, attributes, text)| build_element(tag, attributes, Vec::new(), text),
    );

    leaf.prop_recursive(3, 24, 4, |inner| {
        (
            arb_tag(),
            arb_attributes(),
            prop::collection::vec(inner, 1..4),
        )
            .prop_map(|(tag, attributes, children)| {
                build_element(tag, attributes, children, String::new())
            })
    })
}

fn arb_forest() -> impl Strategy<Value = Vec<Element>> {
    prop::collection::vec(arb_element(), 0..6)
}

/// First-occurrence order and cardinality of each distinct tag
fn tag_groups(elements: &[Element]) -> Vec<(String, usize)> {
    let mut groups: Vec<(String, usize)> = Vec::new();
    for element in elements {
        match groups.iter_mut().find(|(tag, _)| *tag == element.tag) {
            Some((_, count)) => *count += 1,
            None => groups.push((element.tag.clone(), 1)),
        }
    }
    groups
}

/// Array positions and lengths must agree between the two modes
fn assert_same_array_shape(with_attrs: &Value, without: &Value) {
    match (with_attrs, without) {
        (Value::Array(a), Value::Array(b)) => {
            assert_eq!(a.len(), b.len(), "array length changed with attribute mode");
            for (x, y) in a.iter().zip(b.iter()) {
                assert_same_array_shape(x, y);
            }
        }
        (Value::Array(_), _) | (_, Value::Array(_)) => {
            panic!("array shape changed with attribute mode");
        }
        (Value::Object(a), Value::Object(b)) => {
            // every key without attributes is a child group, present in both
            for (key, y) in b.iter() {
                let x = a.get(key).expect("child group key missing under attribute mode");
                assert_same_array_shape(x, y);
            }
        }
        _ => {}
    }
}

proptest! {
    /// The parser is an exact inverse of rendering
    #[test]
    fn parser_reconstructs_rendered_forest(elements in arb_forest()) {
        let markup = render_forest(&elements);
        let document = from_str(&markup).unwrap();
        prop_assert_eq!(document, Document { elements });
    }

    /// Resolved keys come in first-occurrence order; cardinality alone
    /// decides whether a group is an array
    #[test]
    fn key_order_and_arity(elements in arb_forest()) {
        let document = Document { elements };
        let groups = tag_groups(&document.elements);

        let value = resolve(&document, true);
        let object = match &value {
            Value::Object(object) => object,
            other => panic!("resolve must return an object, got {other:?}"),
        };

        let keys: Vec<String> = object.keys().cloned().collect();
        let expected: Vec<String> = groups.iter().map(|(tag, _)| tag.clone()).collect();
        prop_assert_eq!(keys, expected);

        for (tag, count) in &groups {
            let group_value = object.get(tag).unwrap();
            if *count >= 2 {
                let array = group_value.as_array().expect("repeated tag must be an array");
                prop_assert_eq!(array.len(), *count);
            } else {
                prop_assert!(!group_value.is_array());
            }
        }
    }

    /// Disabling attribute mode never changes which groups become arrays
    #[test]
    fn attribute_mode_is_monotonic(elements in arb_forest()) {
        let document = Document { elements };
        let with_attrs = resolve(&document, true);
        let without = resolve(&document, false);
        assert_same_array_shape(&with_attrs, &without);
    }

    /// Normalization removes injected inter-tag whitespace without
    /// changing what the parser sees
    #[test]
    fn normalize_strips_inter_tag_whitespace(elements in arb_forest()) {
        let clean = render_forest(&elements);
        let noisy = format!("\n  {}\n", clean.replace("><", ">\n    <"));
        prop_assert_eq!(normalize(&noisy), clean);
    }
}
