//! tagson - Simplified-markup to JSON converter with shape inference
//!
//! Parses a restricted markup dialect into an ordered forest of elements,
//! then resolves the forest into a JSON-like [`Value`], inferring whether
//! repeated sibling tags become an array, whether attributes are folded
//! into the output, and whether leaf content collapses to a plain string.
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), tagson::Error> {
//! let markup = r#"<employee id="12345"><name>Alex</name></employee>"#;
//! let json = tagson::to_json_string(markup, true)?;
//! assert_eq!(json, r#"{"employee":{"id":"12345","name":"Alex"}}"#);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result, Span};

pub mod cursor;
pub use cursor::Cursor;

pub mod normalize;
pub use normalize::normalize;

pub mod markup;
pub use markup::{Config, Document, Element, Parser};

pub mod value;
pub use value::{Array, Object, Value};

pub mod resolve;
pub use resolve::{resolve, resolve_element, TEXT_KEY};

pub mod render;
pub use render::to_json;

/// Parse markup from string into a document forest
pub fn from_str(s: &str) -> Result<Document> {
    let mut parser = Parser::new(s.as_bytes());
    parser.parse()
}

/// Parse markup from bytes into a document forest
pub fn from_bytes(bytes: &[u8]) -> Result<Document> {
    let mut parser = Parser::new(bytes);
    parser.parse()
}

/// Parse with custom configuration
pub fn from_str_with_config(s: &str, config: Config) -> Result<Document> {
    let mut parser = Parser::with_config(s.as_bytes(), config);
    parser.parse()
}

/// Normalize, parse and resolve in one step
pub fn to_value(s: &str, attribute_mode: bool) -> Result<Value> {
    let normalized = normalize(s);
    let document = from_str(&normalized)?;
    Ok(resolve(&document, attribute_mode))
}

/// Run the full pipeline and render the result as compact JSON text
pub fn to_json_string(s: &str, attribute_mode: bool) -> Result<String> {
    Ok(to_json(&to_value(s, attribute_mode)?))
}
