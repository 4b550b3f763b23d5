//! Compact JSON text rendering

use crate::value::Value;

/// Render a value as compact JSON text.
///
/// Object keys come out in their stored order, so rendered output is a
/// faithful witness of the resolver's key ordering.
pub fn to_json(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", escape(s)),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(to_json).collect();
            format!("[{}]", items.join(","))
        }
        Value::Object(obj) => {
            let pairs: Vec<String> = obj
                .iter()
                .map(|(key, value)| format!("\"{}\":{}", escape(key), to_json(value)))
                .collect();
            format!("{{{}}}", pairs.join(","))
        }
    }
}

fn escape(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\x08' => result.push_str("\\b"),
            '\x0C' => result.push_str("\\f"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            ch if ch.is_control() => {
                result.push_str(&format!("\\u{:04x}", u32::from(ch)));
            }
            ch => result.push(ch),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Array, Object};

    #[test]
    fn test_render_string() {
        assert_eq!(to_json(&Value::from("Alex")), "\"Alex\"");
        assert_eq!(to_json(&Value::from("")), "\"\"");
    }

    #[test]
    fn test_render_escaping() {
        assert_eq!(to_json(&Value::from("a\"b")), "\"a\\\"b\"");
        assert_eq!(to_json(&Value::from("a\\b")), "\"a\\\\b\"");
        assert_eq!(to_json(&Value::from("a\nb")), "\"a\\nb\"");
        assert_eq!(to_json(&Value::from("a\u{1}b")), "\"a\\u0001b\"");
    }

    #[test]
    fn test_render_array() {
        let mut arr = Array::new();
        arr.push("a");
        arr.push("b");
        assert_eq!(to_json(&Value::Array(arr)), "[\"a\",\"b\"]");
    }

    #[test]
    fn test_render_object_in_order() {
        let mut obj = Object::new();
        obj.insert("id", "12345");
        obj.insert("name", "Alex");
        assert_eq!(
            to_json(&Value::Object(obj)),
            "{\"id\":\"12345\",\"name\":\"Alex\"}"
        );
    }

    #[test]
    fn test_render_nested() {
        let mut inner = Object::new();
        inner.insert("name", "Alex");
        let mut outer = Object::new();
        outer.insert("employee", inner);
        assert_eq!(
            to_json(&Value::Object(outer)),
            "{\"employee\":{\"name\":\"Alex\"}}"
        );
    }
}
