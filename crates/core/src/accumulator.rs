//! Collects the descriptors of one `@font-face` rule.
//!
//! Declarations are fed in source order. The first occurrence of each
//! descriptor wins; later ones are only remembered as duplicates so they can
//! be reported.

use fontfall_style::parsers::quoted;
use fontfall_style::{SrcEntry, from_css_string, parse_src};
use fontfall_types::{FamilyName, FontFaceDeclaration, Location};

/// The descriptors this crate looks at. Everything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFaceProperty {
    FontFamily,
    FontWeight,
    FontStyle,
    FontDisplay,
    Src,
}

impl FontFaceProperty {
    /// Matches a property name ASCII case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        const ALL: [FontFaceProperty; 5] = [
            FontFaceProperty::FontFamily,
            FontFaceProperty::FontWeight,
            FontFaceProperty::FontStyle,
            FontFaceProperty::FontDisplay,
            FontFaceProperty::Src,
        ];
        ALL.into_iter().find(|p| p.as_str().eq_ignore_ascii_case(name.trim()))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FontFaceProperty::FontFamily => "font-family",
            FontFaceProperty::FontWeight => "font-weight",
            FontFaceProperty::FontStyle => "font-style",
            FontFaceProperty::FontDisplay => "font-display",
            FontFaceProperty::Src => "src",
        }
    }
}

/// A value together with the position of the declaration it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located<T> {
    pub value: T,
    pub location: Location,
}

/// The first repeated occurrence of a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duplicate {
    pub property: FontFaceProperty,
    pub location: Location,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontFaceRecord {
    pub family: Option<Located<FamilyName>>,
    pub weight: Option<Located<String>>,
    pub style: Option<Located<String>>,
    pub display: Option<Located<String>>,
    /// Location of the first `src` declaration.
    pub src_location: Option<Location>,
    /// Entries of every `src` declaration, repeated ones included.
    pub src_entries: Vec<SrcEntry>,
    /// One entry per repeated descriptor, in order of first repetition.
    pub duplicates: Vec<Duplicate>,
}

impl FontFaceRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_declarations<'a, I>(declarations: I) -> Self
    where
        I: IntoIterator<Item = &'a FontFaceDeclaration>,
    {
        let mut record = Self::new();
        for declaration in declarations {
            record.accumulate(declaration);
        }
        record
    }

    /// Folds one declaration into the record. Unreadable values never fail
    /// the rule; they surface as diagnostics during validation.
    pub fn accumulate(&mut self, declaration: &FontFaceDeclaration) {
        let Some(property) = FontFaceProperty::from_name(&declaration.property) else {
            return;
        };
        let location = declaration.location;
        let value = declaration.value.trim();

        match property {
            FontFaceProperty::FontFamily => {
                if self.family.is_some() {
                    self.note_duplicate(property, location);
                } else if let Some(family) = family_name(value) {
                    self.family = Some(Located { value: family, location });
                }
            }
            FontFaceProperty::FontWeight => self.set_token(property, value, location),
            FontFaceProperty::FontStyle => self.set_token(property, value, location),
            FontFaceProperty::FontDisplay => self.set_token(property, value, location),
            FontFaceProperty::Src => {
                if self.src_location.is_some() {
                    self.note_duplicate(property, location);
                } else {
                    self.src_location = Some(location);
                }
                self.src_entries.extend(parse_src(value, location));
            }
        }
    }

    fn set_token(&mut self, property: FontFaceProperty, value: &str, location: Location) {
        let slot = match property {
            FontFaceProperty::FontWeight => &mut self.weight,
            FontFaceProperty::FontStyle => &mut self.style,
            FontFaceProperty::FontDisplay => &mut self.display,
            FontFaceProperty::FontFamily | FontFaceProperty::Src => return,
        };
        if slot.is_some() {
            self.note_duplicate(property, location);
        } else {
            *slot = Some(Located {
                value: value.to_string(),
                location,
            });
        }
    }

    fn note_duplicate(&mut self, property: FontFaceProperty, location: Location) {
        if !self.duplicates.iter().any(|d| d.property == property) {
            self.duplicates.push(Duplicate { property, location });
        }
    }

    /// The first `src` entry carrying a URL.
    pub fn first_url(&self) -> Option<&SrcEntry> {
        self.src_entries.iter().find(|entry| entry.url.is_some())
    }
}

/// Reads a `font-family` value.
///
/// A single quoted name is decoded. Anything else, such as a family list or
/// an unterminated string, is kept as the trimmed raw text. Empty values
/// yield `None`.
fn family_name(value: &str) -> Option<FamilyName> {
    let value = value.trim();
    let name = match quoted(value) {
        Ok((rest, literal)) if rest.trim().is_empty() => {
            from_css_string(literal).unwrap_or_else(|_| value.to_string())
        }
        _ => value.to_string(),
    };
    if name.trim().is_empty() {
        None
    } else {
        Some(FamilyName::from(name))
    }
}
