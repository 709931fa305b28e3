pub mod css_string;
pub mod parsers;
pub mod src;
pub mod stylesheet;

pub use css_string::{
    CssString, CssStringError, Quote, decode_or_raw, from_css_string, to_css_string,
};
pub use parsers::StyleParseError;
pub use src::{SrcEntry, parse_src};
pub use stylesheet::{AtRule, Declaration, Node, NodePath, Rule, Stylesheet};
