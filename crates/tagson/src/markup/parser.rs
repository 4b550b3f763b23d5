//! Recursive-descent parser for the markup dialect

use indexmap::IndexMap;

use crate::cursor::Cursor;
use crate::error::{Error, ErrorKind, Result, Span};
use crate::markup::model::{Document, Element};

/// Configuration for the markup parser
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Maximum nesting depth (0 means unlimited)
    pub max_depth: u16,
    /// Maximum input size in bytes (0 means unlimited)
    pub max_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 128,
            max_size: 10 * 1024 * 1024, // 10 MB default
        }
    }
}

impl Config {
    /// Create a new config with unlimited depth and size
    pub const fn unlimited() -> Self {
        Self {
            max_depth: 0,
            max_size: 0,
        }
    }

    /// Create a new config with specific limits
    pub const fn new(max_depth: u16, max_size: usize) -> Self {
        Self {
            max_depth,
            max_size,
        }
    }
}

/// Markup parser
#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    config: Config,
    depth: u16,
}

impl<'a> Parser<'a> {
    /// Create a new parser with default configuration
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_config(input, Config::default())
    }

    /// Create a new parser with custom configuration
    pub const fn with_config(input: &'a [u8], config: Config) -> Self {
        Self {
            cursor: Cursor::new(input),
            config,
            depth: 0,
        }
    }

    /// Parse the whole input into an ordered forest.
    ///
    /// Repeats element parsing across the input; whitespace between
    /// top-level elements is skipped, any other stray content fails.
    pub fn parse(&mut self) -> Result<Document> {
        if self.config.max_size > 0 && self.cursor.remaining().len() > self.config.max_size {
            return Err(Error::new(
                ErrorKind::MaxSizeExceeded {
                    max: self.config.max_size,
                },
                self.span_here(),
            ));
        }

        let mut elements = Vec::new();
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.is_eof() {
                break;
            }
            if self.cursor.current() != Some(b'<') {
                return Err(self.error_here("expected opening tag"));
            }
            elements.push(self.parse_element()?);
        }

        Ok(Document { elements })
    }

    fn parse_element(&mut self) -> Result<Element> {
        self.depth = self.depth.saturating_add(1);
        if self.config.max_depth > 0 && self.depth > self.config.max_depth {
            return Err(Error::new(
                ErrorKind::MaxDepthExceeded {
                    max: self.config.max_depth,
                },
                self.span_here(),
            ));
        }

        let element = self.parse_element_inner()?;
        self.depth -= 1;
        Ok(element)
    }

    fn parse_element_inner(&mut self) -> Result<Element> {
        self.expect_byte(b'<')?;

        if self.cursor.current() == Some(b'/') {
            return Err(self.error_here("unexpected closing tag"));
        }

        let tag = self.parse_name()?;
        let attributes = self.parse_attributes()?;
        self.expect_byte(b'>')?;

        let mut children = Vec::new();
        let mut text = String::new();
        loop {
            if self.cursor.current() == Some(b'<') && self.cursor.peek(1) == Some(b'/') {
                self.cursor.advance_by(2);
                let found = self.parse_name()?;
                if found != tag {
                    return Err(Error::new(
                        ErrorKind::MismatchedClosingTag {
                            expected: tag,
                            found,
                        },
                        self.span_here(),
                    ));
                }
                self.cursor.skip_whitespace();
                self.expect_byte(b'>')?;
                break;
            }

            if self.cursor.current() == Some(b'<') {
                children.push(self.parse_element()?);
                continue;
            }

            if self.cursor.is_eof() {
                return Err(Error::with_message(
                    ErrorKind::UnbalancedTag,
                    self.span_here(),
                    format!("element <{tag}> is never closed"),
                ));
            }

            self.parse_text(&mut text)?;
        }

        Ok(Element {
            tag,
            attributes,
            children,
            text: text.trim().to_string(),
        })
    }

    fn parse_attributes(&mut self) -> Result<IndexMap<String, String>> {
        let mut attributes = IndexMap::new();

        loop {
            self.cursor.skip_whitespace();
            match self.cursor.current() {
                Some(b'>') => break,
                Some(b'/') => {
                    return Err(self.error_here("self-closing tags are not supported"));
                }
                Some(_) => {}
                None => {
                    return Err(Error::with_message(
                        ErrorKind::UnbalancedTag,
                        self.span_here(),
                        "unterminated tag",
                    ));
                }
            }

            let name = self.parse_name()?;
            self.cursor.skip_whitespace();
            if !self.cursor.eat(b'=') {
                return Err(Error::with_message(
                    ErrorKind::MalformedAttribute,
                    self.span_here(),
                    format!("attribute {name} is missing '='"),
                ));
            }
            self.cursor.skip_whitespace();
            let value = self.parse_attribute_value()?;

            // repeated keys only occur in malformed documents; last one wins
            attributes.insert(name, value);
        }

        Ok(attributes)
    }

    fn parse_attribute_value(&mut self) -> Result<String> {
        let quote = match self.cursor.current() {
            Some(b @ (b'"' | b'\'')) => b,
            _ => {
                return Err(Error::with_message(
                    ErrorKind::MalformedAttribute,
                    self.span_here(),
                    "expected quoted attribute value",
                ));
            }
        };
        self.cursor.advance();

        let start = self.cursor.offset();
        while let Some(b) = self.cursor.current() {
            if b == quote {
                let raw = self.cursor.slice_from(start);
                self.cursor.advance();
                return bytes_to_string(raw);
            }
            self.cursor.advance();
        }

        Err(Error::new(
            ErrorKind::UnterminatedAttributeValue,
            self.span_here(),
        ))
    }

    fn parse_text(&mut self, buffer: &mut String) -> Result<()> {
        let start = self.cursor.offset();
        while let Some(b) = self.cursor.current() {
            if b == b'<' {
                break;
            }
            self.cursor.advance();
        }

        let chunk = bytes_to_string(self.cursor.slice_from(start))?;
        buffer.push_str(&chunk);
        Ok(())
    }

    fn parse_name(&mut self) -> Result<String> {
        let start = self.cursor.offset();

        let Some(first) = self.cursor.current() else {
            return Err(self.error_here("expected name"));
        };
        if !is_name_start(first) {
            return Err(self.error_here("expected name"));
        }

        self.cursor.advance();
        while let Some(b) = self.cursor.current() {
            if is_name_char(b) {
                self.cursor.advance();
            } else {
                break;
            }
        }

        bytes_to_string(self.cursor.slice_from(start))
    }

    fn expect_byte(&mut self, expected: u8) -> Result<()> {
        if self.cursor.eat(expected) {
            Ok(())
        } else {
            Err(self.error_here("unexpected token"))
        }
    }

    fn error_here(&self, message: &str) -> Error {
        Error::with_message(ErrorKind::InvalidToken, self.span_here(), message.to_string())
    }

    fn span_here(&self) -> Span {
        let pos = self.cursor.position();
        Span::new(pos, pos)
    }
}

fn bytes_to_string(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(|s| s.to_string())
        .map_err(|_| {
            Error::with_message(
                ErrorKind::InvalidToken,
                Span::empty(),
                "invalid utf-8".to_string(),
            )
        })
}

fn is_name_start(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'_')
}

fn is_name_char(b: u8) -> bool {
    is_name_start(b) || matches!(b, b'0'..=b'9' | b'-' | b'.')
}
