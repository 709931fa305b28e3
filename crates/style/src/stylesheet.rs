//! A minimal style sheet tree: enough structure to find `@font-face` rules,
//! read their declarations with source positions, insert generated rules and
//! write the result back out.
//!
//! The reader is deliberately forgiving about values (they are kept as raw
//! text) and strict about structure (unbalanced braces are an error).

use crate::parsers::{LineIndex, StyleParseError, ident, skip_trivia, until_top_level};
use fontfall_types::{FontFaceDeclaration, Location};
use std::fmt;

/// Child indexes leading from the top level of a [`Stylesheet`] to a node.
pub type NodePath = Vec<usize>;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    AtRule(AtRule),
    Rule(Rule),
    Declaration(Declaration),
}

impl Node {
    pub fn location(&self) -> Location {
        match self {
            Node::AtRule(at_rule) => at_rule.location,
            Node::Rule(rule) => rule.location,
            Node::Declaration(decl) => decl.location,
        }
    }

    fn children(&self) -> Option<&Vec<Node>> {
        match self {
            Node::AtRule(at_rule) => at_rule.block.as_ref(),
            Node::Rule(rule) => Some(&rule.block),
            Node::Declaration(_) => None,
        }
    }

    fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::AtRule(at_rule) => at_rule.block.as_mut(),
            Node::Rule(rule) => Some(&mut rule.block),
            Node::Declaration(_) => None,
        }
    }
}

/// An at-rule such as `@font-face { ... }` or `@import 'a.css';`.
#[derive(Debug, Clone, PartialEq)]
pub struct AtRule {
    pub name: String,
    pub prelude: String,
    /// `None` for statement at-rules terminated by `;`.
    pub block: Option<Vec<Node>>,
    pub location: Location,
}

impl AtRule {
    /// Creates an `@font-face` rule holding the given declarations.
    pub fn font_face(declarations: Vec<Declaration>) -> Self {
        Self {
            name: "font-face".to_string(),
            prelude: String::new(),
            block: Some(declarations.into_iter().map(Node::Declaration).collect()),
            location: Location::default(),
        }
    }

    pub fn is_font_face(&self) -> bool {
        self.name.eq_ignore_ascii_case("font-face")
    }

    /// The direct declarations of this rule, in source order.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.block
            .iter()
            .flatten()
            .filter_map(|node| match node {
                Node::Declaration(decl) => Some(decl),
                _ => None,
            })
    }

    /// The declarations converted to the form consumed by font-face
    /// validation.
    pub fn font_face_declarations(&self) -> Vec<FontFaceDeclaration> {
        self.declarations()
            .map(|decl| FontFaceDeclaration::new(&decl.property, &decl.value, decl.location))
            .collect()
    }
}

/// A qualified rule such as `body { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub selector: String,
    pub block: Vec<Node>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    pub important: bool,
    pub location: Location,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important: false,
            location: Location::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    pub nodes: Vec<Node>,
}

impl Stylesheet {
    pub fn parse(css: &str) -> Result<Self, StyleParseError> {
        let index = LineIndex::new(css);
        let (rest, nodes) = parse_nodes(&index, css, None)?;
        debug_assert!(rest.is_empty());
        log::debug!("Parsed style sheet: {} top-level node(s)", nodes.len());
        Ok(Self { nodes })
    }

    /// All `@font-face` rules, including ones nested in other at-rules, in
    /// document order.
    pub fn font_faces(&self) -> Vec<(NodePath, &AtRule)> {
        let mut found = Vec::new();
        collect_font_faces(&self.nodes, &mut Vec::new(), &mut found);
        found
    }

    pub fn get(&self, path: &[usize]) -> Option<&Node> {
        let (last, parents) = path.split_last()?;
        let mut nodes = &self.nodes;
        for &i in parents {
            nodes = nodes.get(i)?.children()?;
        }
        nodes.get(*last)
    }

    /// Inserts `node` as the next sibling of the node at `path`.
    ///
    /// Returns `false` if `path` does not point at a node.
    pub fn insert_after(&mut self, path: &[usize], node: Node) -> bool {
        let Some((last, parents)) = path.split_last() else {
            return false;
        };
        let mut nodes = &mut self.nodes;
        for &i in parents {
            match nodes.get_mut(i).and_then(Node::children_mut) {
                Some(children) => nodes = children,
                None => return false,
            }
        }
        if *last >= nodes.len() {
            return false;
        }
        nodes.insert(last + 1, node);
        true
    }
}

fn collect_font_faces<'a>(
    nodes: &'a [Node],
    path: &mut NodePath,
    found: &mut Vec<(NodePath, &'a AtRule)>,
) {
    for (i, node) in nodes.iter().enumerate() {
        path.push(i);
        match node {
            Node::AtRule(at_rule) if at_rule.is_font_face() => found.push((path.clone(), at_rule)),
            _ => {
                if let Some(children) = node.children() {
                    collect_font_faces(children, path, found);
                }
            }
        }
        path.pop();
    }
}

// --- Reading ---

/// Parses nodes until end of input (top level, `opened_at == None`) or until
/// the `}` closing the block opened at `opened_at`.
fn parse_nodes<'a>(
    index: &LineIndex<'_>,
    input: &'a str,
    opened_at: Option<Location>,
) -> Result<(&'a str, Vec<Node>), StyleParseError> {
    let mut nodes = Vec::new();
    let mut rest = input;
    loop {
        rest = skip_trivia(rest);
        let location = index.location_of(rest);
        match rest.chars().next() {
            None => {
                return match opened_at {
                    None => Ok((rest, nodes)),
                    Some(location) => Err(StyleParseError::UnclosedBlock { location }),
                };
            }
            Some('}') => {
                return match opened_at {
                    Some(_) => Ok((&rest[1..], nodes)),
                    None => Err(StyleParseError::UnexpectedClose { location }),
                };
            }
            Some(';') => rest = &rest[1..],
            Some('@') => {
                let (after, at_rule) = parse_at_rule(index, rest)?;
                nodes.push(Node::AtRule(at_rule));
                rest = after;
            }
            Some(_) => {
                let declaration = match opened_at {
                    Some(_) => parse_declaration(rest, location),
                    None => None,
                };
                match declaration {
                    Some((after, decl)) => {
                        nodes.push(Node::Declaration(decl));
                        rest = after;
                    }
                    None => {
                        let (after, rule) = parse_rule(index, rest)?;
                        nodes.push(Node::Rule(rule));
                        rest = after;
                    }
                }
            }
        }
    }
}

fn parse_at_rule<'a>(
    index: &LineIndex<'_>,
    input: &'a str,
) -> Result<(&'a str, AtRule), StyleParseError> {
    let location = index.location_of(input);
    let (rest, name) = ident(&input[1..]).map_err(|_| StyleParseError::Syntax {
        message: "expected at-rule name after '@'".to_string(),
        location,
    })?;
    let (rest, prelude) = until_top_level(rest, &['{', ';', '}']);
    let prelude = prelude.trim().to_string();

    let (rest, block) = match rest.chars().next() {
        Some('{') => {
            let (rest, children) = parse_nodes(index, &rest[1..], Some(location))?;
            (rest, Some(children))
        }
        Some(';') => (&rest[1..], None),
        _ => (rest, None),
    };

    Ok((
        rest,
        AtRule {
            name: name.to_string(),
            prelude,
            block,
            location,
        },
    ))
}

fn parse_rule<'a>(
    index: &LineIndex<'_>,
    input: &'a str,
) -> Result<(&'a str, Rule), StyleParseError> {
    let location = index.location_of(input);
    let (rest, selector) = until_top_level(input, &['{', ';', '}']);
    if !rest.starts_with('{') {
        return Err(StyleParseError::Syntax {
            message: format!("expected '{{' after '{}'", selector.trim()),
            location,
        });
    }
    let (rest, block) = parse_nodes(index, &rest[1..], Some(location))?;
    Ok((
        rest,
        Rule {
            selector: selector.trim().to_string(),
            block,
            location,
        },
    ))
}

/// Tries to read `property: value;`. Returns `None` when the text turns out
/// to be a nested rule (a `{` appears before the value ends).
fn parse_declaration(input: &str, location: Location) -> Option<(&str, Declaration)> {
    let (rest, property) = ident(input).ok()?;
    let rest = skip_trivia(rest).strip_prefix(':')?;
    let (rest, value) = until_top_level(rest, &[';', '{', '}']);
    if rest.starts_with('{') {
        return None;
    }
    let rest = rest.strip_prefix(';').unwrap_or(rest);

    let (value, important) = split_important(value.trim());
    Some((
        rest,
        Declaration {
            property: property.to_string(),
            value: value.to_string(),
            important,
            location,
        },
    ))
}

fn split_important(value: &str) -> (&str, bool) {
    if let Some(bang) = value.rfind('!') {
        let flag = value[bang + 1..].trim();
        if flag.eq_ignore_ascii_case("important") {
            return (value[..bang].trim_end(), true);
        }
    }
    (value, false)
}

// --- Writing ---

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write_node(f, node, 0)?;
        }
        Ok(())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self, 0)
    }
}

fn write_block(f: &mut fmt::Formatter<'_>, nodes: &[Node], depth: usize) -> fmt::Result {
    writeln!(f, " {{")?;
    for node in nodes {
        write_node(f, node, depth + 1)?;
    }
    writeln!(f, "{:indent$}}}", "", indent = depth * 2)
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, depth: usize) -> fmt::Result {
    let indent = depth * 2;
    match node {
        Node::AtRule(at_rule) => {
            write!(f, "{:indent$}@{}", "", at_rule.name)?;
            if !at_rule.prelude.is_empty() {
                write!(f, " {}", at_rule.prelude)?;
            }
            match &at_rule.block {
                Some(children) => write_block(f, children, depth),
                None => writeln!(f, ";"),
            }
        }
        Node::Rule(rule) => {
            write!(f, "{:indent$}{}", "", rule.selector)?;
            write_block(f, &rule.block, depth)
        }
        Node::Declaration(decl) => {
            write!(f, "{:indent$}{}: {}", "", decl.property, decl.value)?;
            if decl.important {
                write!(f, " !important")?;
            }
            writeln!(f, ";")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "\
@import 'base.css';

/* fonts */
@font-face {
  font-family: 'Noto Serif';
  src: url(./fonts/a.ttf) format('ttf');
}

body { font-family: 'Noto Serif', serif !important; }

@media print {
  @font-face {
    font-family: Roboto;
  }
  p { color: red }
}
";

    #[test]
    fn test_parse_structure() {
        let sheet = Stylesheet::parse(SHEET).unwrap();
        assert_eq!(sheet.nodes.len(), 4);

        let Node::AtRule(import) = &sheet.nodes[0] else { panic!("expected @import") };
        assert_eq!(import.name, "import");
        assert_eq!(import.prelude, "'base.css'");
        assert!(import.block.is_none());

        let Node::Rule(body) = &sheet.nodes[2] else { panic!("expected rule") };
        assert_eq!(body.selector, "body");
        let Node::Declaration(decl) = &body.block[0] else { panic!("expected declaration") };
        assert_eq!(decl.value, "'Noto Serif', serif");
        assert!(decl.important);
    }

    #[test]
    fn test_font_face_declarations_carry_locations() {
        let sheet = Stylesheet::parse(SHEET).unwrap();
        let faces = sheet.font_faces();
        assert_eq!(faces.len(), 2);

        let (path, face) = &faces[0];
        assert_eq!(path, &vec![1]);
        assert_eq!(face.location, Location::new(4, 1));
        let decls = face.font_face_declarations();
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].property, "font-family");
        assert_eq!(decls[0].value, "'Noto Serif'");
        assert_eq!(decls[0].location, Location::new(5, 3));
        assert_eq!(decls[1].value, "url(./fonts/a.ttf) format('ttf')");
        assert_eq!(decls[1].location, Location::new(6, 3));

        let (nested_path, nested) = &faces[1];
        assert_eq!(nested_path, &vec![3, 0]);
        assert_eq!(nested.location, Location::new(12, 3));
    }

    #[test]
    fn test_insert_after() {
        let mut sheet = Stylesheet::parse(SHEET).unwrap();
        let generated =
            Node::AtRule(AtRule::font_face(vec![Declaration::new("font-family", "'X'")]));

        assert!(sheet.insert_after(&[3, 0], generated.clone()));
        assert!(sheet.insert_after(&[1], generated.clone()));
        assert_eq!(sheet.nodes.len(), 5);
        assert_eq!(sheet.get(&[2]), Some(&generated));
        assert_eq!(sheet.get(&[4, 1]), Some(&generated));

        assert!(!sheet.insert_after(&[42], generated.clone()));
        assert!(!sheet.insert_after(&[], generated));
    }

    #[test]
    fn test_nested_rule_inside_block() {
        let sheet = Stylesheet::parse("@media screen { a:hover { color: blue; } }").unwrap();
        let Node::AtRule(media) = &sheet.nodes[0] else { panic!("expected @media") };
        let children = media.block.as_ref().unwrap();
        let Node::Rule(rule) = &children[0] else { panic!("expected nested rule") };
        assert_eq!(rule.selector, "a:hover");
    }

    #[test]
    fn test_structural_errors() {
        assert!(matches!(
            Stylesheet::parse("@font-face {\n  src: url(a.ttf);"),
            Err(StyleParseError::UnclosedBlock { location }) if location == Location::new(1, 1)
        ));
        assert!(matches!(
            Stylesheet::parse("a {}\n}"),
            Err(StyleParseError::UnexpectedClose { location }) if location == Location::new(2, 1)
        ));
        assert!(matches!(Stylesheet::parse("a b c"), Err(StyleParseError::Syntax { .. })));
    }

    #[test]
    fn test_serialize() {
        let sheet = Stylesheet::parse(
            "@font-face{font-family:'A';src:url(a.ttf)}@media print{p{color:red}}",
        )
        .unwrap();
        assert_eq!(
            sheet.to_string(),
            "@font-face {\n  font-family: 'A';\n  src: url(a.ttf);\n}\n\n\
             @media print {\n  p {\n    color: red;\n  }\n}\n"
        );
    }

    #[test]
    fn test_serialize_round_trips_through_parse() {
        let sheet = Stylesheet::parse(SHEET).unwrap();
        let reparsed = Stylesheet::parse(&sheet.to_string()).unwrap();
        assert_eq!(reparsed.font_faces().len(), 2);
        assert_eq!(reparsed.to_string(), sheet.to_string());
    }
}
