//! Quoted CSS string literals.
//!
//! Decoding accepts either quote character. Encoding always produces a
//! single-quoted literal, so output is canonical regardless of how the input
//! was written.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CssStringError {
    #[error("Malformed CSS string literal {literal:?}: {reason}")]
    MalformedLiteral { literal: String, reason: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quote {
    #[default]
    Single,
    Double,
}

impl Quote {
    pub fn as_char(self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '\'' => Some(Quote::Single),
            '"' => Some(Quote::Double),
            _ => None,
        }
    }
}

/// A decoded string literal and the quote it was written with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssString {
    pub value: String,
    pub quote: Quote,
}

impl CssString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quote: Quote::Single,
        }
    }

    /// Decodes a quoted literal such as `'Noto Serif'` or `"a \" b"`.
    pub fn parse(literal: &str) -> Result<Self, CssStringError> {
        let malformed = |reason| CssStringError::MalformedLiteral {
            literal: literal.to_string(),
            reason,
        };

        let mut chars = literal.chars();
        let quote = chars
            .next()
            .and_then(Quote::from_char)
            .ok_or_else(|| malformed("missing opening quote"))?;
        let quote_char = quote.as_char();

        let mut value = String::with_capacity(literal.len());
        loop {
            match chars.next() {
                None => return Err(malformed("unterminated literal")),
                Some('\\') => match chars.next() {
                    None => return Err(malformed("dangling escape")),
                    Some('n') => value.push('\n'),
                    Some(c) => value.push(c),
                },
                Some(c) if c == quote_char => break,
                Some(c) => value.push(c),
            }
        }

        if chars.next().is_some() {
            return Err(malformed("trailing characters after closing quote"));
        }

        Ok(Self { value, quote })
    }

    /// Serializes as a single-quoted literal.
    pub fn to_css(&self) -> String {
        to_css_string(&self.value)
    }
}

/// Decodes a quoted CSS string literal into its text value.
pub fn from_css_string(literal: &str) -> Result<String, CssStringError> {
    CssString::parse(literal).map(|s| s.value)
}

/// Encodes text as a single-quoted CSS string literal.
pub fn to_css_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Decodes `text` if it is quoted, otherwise returns the trimmed token.
pub fn decode_or_raw(text: &str) -> Result<String, CssStringError> {
    let text = text.trim();
    if text.starts_with(['\'', '"']) {
        from_css_string(text)
    } else {
        Ok(text.to_string())
    }
}
