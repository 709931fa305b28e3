//! Parsing of `@font-face` `src` descriptor values.
//!
//! A `src` value is a comma-separated list such as
//! `url(a.woff2) format('woff2'), local('A'), url("a.ttf")`. Each segment
//! becomes one [`SrcEntry`]. Segments without a `url(...)` are kept with
//! `url: None` instead of being rejected.

use crate::css_string::decode_or_raw;
use crate::parsers::{component, quoted, skip_trivia, split_top_level};
use fontfall_types::Location;
use nom::IResult;
use nom::Parser;
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_while1};
use nom::character::complete::{char, multispace0};
use nom::sequence::delimited;

/// One comma-separated segment of a `src` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrcEntry {
    pub url: Option<String>,
    pub format: Option<String>,
    pub location: Location,
}

/// Parses `name(<arg>)` and returns the raw, still-quoted argument.
fn function_argument<'a>(name: &'static str, input: &'a str) -> IResult<&'a str, &'a str> {
    delimited(
        (tag_no_case(name), char('('), multispace0),
        alt((
            quoted,
            take_while1(|c: char| c != ')' && !c.is_whitespace()),
        )),
        (multispace0, char(')')),
    )
    .parse(input)
}

fn url_function(input: &str) -> IResult<&str, &str> {
    function_argument("url", input)
}

fn format_function(input: &str) -> IResult<&str, &str> {
    function_argument("format", input)
}

/// Decodes a `url()`/`format()` argument. A broken quoted argument is
/// logged and dropped.
fn decode_argument(function: &str, arg: &str, location: Location) -> Option<String> {
    match decode_or_raw(arg) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring {}() argument at {}: {}", function, location, e);
            None
        }
    }
}

/// Parses a single `src` segment. The first `url(...)` and `format(...)` win.
///
/// Never fails: anything unreadable leaves `url`/`format` unset.
pub fn parse_src_segment(segment: &str, location: Location) -> SrcEntry {
    let mut url = None;
    let mut format = None;
    let mut rest = skip_trivia(segment);

    while !rest.is_empty() {
        if let Ok((after, arg)) = url_function(rest) {
            if url.is_none() {
                url = decode_argument("url", arg, location);
            }
            rest = after;
        } else if let Ok((after, arg)) = format_function(rest) {
            if format.is_none() {
                format = decode_argument("format", arg, location);
            }
            rest = after;
        } else {
            // Anything else (local(), tech(), stray tokens) is skipped whole.
            rest = match component(rest) {
                Ok((after, _)) => after,
                Err(_) => break,
            };
        }
        rest = skip_trivia(rest);
    }

    SrcEntry {
        url,
        format,
        location,
    }
}

/// Parses a full `src` value into one entry per comma-separated segment.
///
/// Empty segments (e.g. a trailing comma) are dropped.
pub fn parse_src(value: &str, location: Location) -> Vec<SrcEntry> {
    split_top_level(value, ',')
        .into_iter()
        .filter(|segment| !segment.trim().is_empty())
        .map(|segment| parse_src_segment(segment, location))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at() -> Location {
        Location::new(1, 1)
    }

    #[test]
    fn test_bare_url_and_quoted_format() {
        let entries = parse_src("url(./test/fonts/roboto/Roboto-Regular.ttf) format('ttf')", at());
        assert_eq!(
            entries,
            vec![SrcEntry {
                url: Some("./test/fonts/roboto/Roboto-Regular.ttf".to_string()),
                format: Some("ttf".to_string()),
                location: at(),
            }]
        );
    }

    #[test]
    fn test_quoted_url_without_format() {
        let entries = parse_src("url(\"fonts/My Font.woff2\")", at());
        assert_eq!(entries[0].url.as_deref(), Some("fonts/My Font.woff2"));
        assert_eq!(entries[0].format, None);
    }

    #[test]
    fn test_missing_url() {
        let entries = parse_src("format('ttf')", at());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].url, None);
        assert_eq!(entries[0].format.as_deref(), Some("ttf"));
    }

    #[test]
    fn test_multiple_segments() {
        let entries = parse_src(
            "local('Roboto'), url(a.woff2) format(\"woff2\"), URL( 'b,c.ttf' ) format(truetype)",
            at(),
        );
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].url, None);
        assert_eq!(entries[1].url.as_deref(), Some("a.woff2"));
        assert_eq!(entries[1].format.as_deref(), Some("woff2"));
        assert_eq!(entries[2].url.as_deref(), Some("b,c.ttf"));
        assert_eq!(entries[2].format.as_deref(), Some("truetype"));
    }

    #[test]
    fn test_malformed_values_do_not_fail() {
        for value in ["url(", "url()", "(((", "'unterminated", ",,,", ""] {
            let entries = parse_src(value, at());
            assert!(entries.iter().all(|e| e.url.is_none()), "{:?}", value);
        }
    }

    #[test]
    fn test_url_inside_other_function_is_ignored() {
        let entries = parse_src("myurl(a.ttf)", at());
        assert_eq!(entries[0].url, None);
    }

    #[test]
    fn test_unterminated_quoted_url_is_dropped() {
        let entries = parse_src("url('broken.ttf) format(truetype)", at());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].url, None);
        assert_eq!(entries[0].format.as_deref(), Some("truetype"));
    }

    #[test]
    fn test_unterminated_quoted_format_keeps_url() {
        let entries = parse_src("url(a.ttf) format(\"truetype)", at());
        assert_eq!(entries[0].url.as_deref(), Some("a.ttf"));
        assert_eq!(entries[0].format, None);
    }
}
