use crate::location::Location;

/// One `property: value` pair taken from an `@font-face` block.
///
/// The value is the raw declaration text with surrounding whitespace trimmed
/// and any `!important` flag removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFaceDeclaration {
    pub property: String,
    pub value: String,
    pub location: Location,
}

impl FontFaceDeclaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>, location: Location) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            location,
        }
    }
}
