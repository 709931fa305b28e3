//! Low-level nom parser functions shared by the `src` value parser and the
//! style sheet reader.
//!
//! These work on raw `&str` slices. Positions are recovered afterwards from
//! the remaining input length through [`LineIndex`].

use fontfall_types::Location;
use nom::IResult;
use nom::Parser;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_until, take_while1};
use nom::character::complete::{anychar, multispace1};
use nom::combinator::{recognize, value};
use nom::error::{Error, ErrorKind};
use nom::multi::many0_count;
use thiserror::Error;

/// Errors that can occur while reading a style sheet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleParseError {
    #[error("Parse error at {location}: {message}")]
    Syntax { message: String, location: Location },

    #[error("Unclosed block opened at {location}")]
    UnclosedBlock { location: Location },

    #[error("Unexpected '}}' at {location}")]
    UnexpectedClose { location: Location },
}

fn fail(input: &str, kind: ErrorKind) -> nom::Err<Error<&str>> {
    nom::Err::Error(Error::new(input, kind))
}

// --- Trivia ---

/// Recognizes a `/* ... */` comment.
pub fn comment(input: &str) -> IResult<&str, &str> {
    recognize((tag("/*"), take_until("*/"), tag("*/"))).parse(input)
}

/// Skips any run of whitespace and comments.
pub fn trivia(input: &str) -> IResult<&str, ()> {
    value((), many0_count(alt((multispace1, comment)))).parse(input)
}

/// Like [`trivia`], for callers that cannot fail.
pub fn skip_trivia(input: &str) -> &str {
    match trivia(input) {
        Ok((rest, ())) => rest,
        Err(_) => input,
    }
}

// --- Tokens ---

pub fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

/// Recognizes an identifier such as `font-face` or `src`.
pub fn ident(input: &str) -> IResult<&str, &str> {
    take_while1(is_ident_char).parse(input)
}

/// Recognizes a complete quoted string, escapes included, without decoding it.
///
/// An unescaped line break ends the attempt, as strings cannot span lines.
pub fn quoted(input: &str) -> IResult<&str, &str> {
    let mut chars = input.char_indices();
    let quote = match chars.next() {
        Some((_, c @ ('\'' | '"'))) => c,
        _ => return Err(fail(input, ErrorKind::Char)),
    };
    let mut escaped = false;
    for (i, c) in chars {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '\n' {
            break;
        } else if c == quote {
            let end = i + c.len_utf8();
            return Ok((&input[end..], &input[..end]));
        }
    }
    Err(fail(input, ErrorKind::Char))
}

/// Recognizes a parenthesized group, including nested groups and strings.
pub fn parenthesized(input: &str) -> IResult<&str, &str> {
    if !input.starts_with('(') {
        return Err(fail(input, ErrorKind::Char));
    }
    let mut depth = 0usize;
    let mut rest = input;
    while let Some(c) = rest.chars().next() {
        if let Ok((after, _)) = quoted(rest) {
            rest = after;
            continue;
        }
        rest = &rest[c.len_utf8()..];
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    let consumed = input.len() - rest.len();
                    return Ok((rest, &input[..consumed]));
                }
            }
            _ => {}
        }
    }
    Err(fail(input, ErrorKind::Char))
}

/// Recognizes one component: a string, a function call, a bare group or a
/// single character.
pub fn component(input: &str) -> IResult<&str, &str> {
    alt((
        quoted,
        recognize((ident, parenthesized)),
        parenthesized,
        recognize(anychar),
    ))
    .parse(input)
}

/// Consumes text up to (not including) the first of `stops` that appears at
/// nesting depth zero, outside strings and comments.
///
/// Never fails; the returned slice may be empty.
pub fn until_top_level<'a>(input: &'a str, stops: &[char]) -> (&'a str, &'a str) {
    let mut depth = 0usize;
    let mut rest = input;
    while let Some(c) = rest.chars().next() {
        if depth == 0 && stops.contains(&c) {
            break;
        }
        if let Ok((after, _)) = quoted(rest).or_else(|_| comment(rest)) {
            rest = after;
            continue;
        }
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            _ => {}
        }
        rest = &rest[c.len_utf8()..];
    }
    let consumed = input.len() - rest.len();
    (rest, &input[..consumed])
}

/// Splits on `separator` wherever it occurs outside strings and brackets.
pub fn split_top_level(input: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = input;
    loop {
        let (after, part) = until_top_level(rest, &[separator]);
        parts.push(part);
        match after.strip_prefix(separator) {
            Some(next) => rest = next,
            None => break,
        }
    }
    parts
}

// --- Positions ---

/// Maps byte offsets in a source text to 1-based line/column locations.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(source: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { source, line_starts }
    }

    /// Location of the first character of `rest`, a suffix of the source.
    pub fn location_of(&self, rest: &str) -> Location {
        self.location(self.source.len() - rest.len())
    }

    pub fn location(&self, offset: usize) -> Location {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let start = self.line_starts[line];
        let col = self.source[start..offset].chars().count() + 1;
        Location::new(line + 1, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted() {
        assert_eq!(quoted("'a b' rest"), Ok((" rest", "'a b'")));
        assert_eq!(quoted("\"a \\\" b\"x"), Ok(("x", "\"a \\\" b\"")));
        assert_eq!(quoted("'it\\'s'"), Ok(("", "'it\\'s'")));
        assert!(quoted("'open").is_err());
        assert!(quoted("'open\n'").is_err());
        assert_eq!(quoted("'a\\\nb'"), Ok(("", "'a\\\nb'")));
        assert!(quoted("bare").is_err());
    }

    #[test]
    fn test_trivia() {
        assert_eq!(skip_trivia("  /* note */\n  src"), "src");
        assert_eq!(skip_trivia("src"), "src");
        assert_eq!(skip_trivia(""), "");
    }

    #[test]
    fn test_component() {
        assert_eq!(component("url(a.ttf) x"), Ok((" x", "url(a.ttf)")));
        assert_eq!(component("local('A (b)')"), Ok(("", "local('A (b)')")));
        assert_eq!(component("'q' x"), Ok((" x", "'q'")));
        assert_eq!(component(", x"), Ok((" x", ",")));
    }

    #[test]
    fn test_until_top_level() {
        assert_eq!(
            until_top_level("url('a;b') format('ttf'); next", &[';']),
            ("; next", "url('a;b') format('ttf')")
        );
        assert_eq!(until_top_level("no stop", &[';']), ("", "no stop"));
        assert_eq!(until_top_level("a /* ; */ b; c", &[';']), ("; c", "a /* ; */ b"));
    }

    #[test]
    fn test_split_top_level() {
        assert_eq!(
            split_top_level("url(a.woff2) format('woff2'), url('b,c.ttf')", ','),
            vec!["url(a.woff2) format('woff2')", " url('b,c.ttf')"]
        );
        assert_eq!(split_top_level("", ','), vec![""]);
    }

    #[test]
    fn test_line_index() {
        let source = "a\n  bc\n\nd";
        let index = LineIndex::new(source);
        assert_eq!(index.location(0), Location::new(1, 1));
        assert_eq!(index.location(4), Location::new(2, 3));
        assert_eq!(index.location_of("d"), Location::new(4, 1));
        assert_eq!(index.location(source.len()), Location::new(4, 2));
    }
}
