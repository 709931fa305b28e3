//! Per-rule warnings produced while validating `@font-face` rules.

use crate::ids::FamilyName;
use crate::location::Location;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticKind {
    DuplicateDeclaration,
    MissingFontFamily,
    MissingSrc,
    NoUrlInSrc,
    MissingFontTypeMapping,
}

impl DiagnosticKind {
    /// Whether this condition prevents a fallback rule from being generated.
    pub fn suppresses_fallback(self) -> bool {
        !matches!(self, DiagnosticKind::DuplicateDeclaration)
    }
}

/// A warning attached to a position in the source style sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub location: Location,
    pub message: String,
}

impl Diagnostic {
    pub fn duplicate_declaration(location: Location) -> Self {
        Self {
            kind: DiagnosticKind::DuplicateDeclaration,
            location,
            message: "Duplicate declaration".to_string(),
        }
    }

    pub fn missing_font_family(location: Location) -> Self {
        Self {
            kind: DiagnosticKind::MissingFontFamily,
            location,
            message: "Missing font-family".to_string(),
        }
    }

    pub fn missing_src(location: Location) -> Self {
        Self {
            kind: DiagnosticKind::MissingSrc,
            location,
            message: "Missing src".to_string(),
        }
    }

    pub fn no_url_in_src(location: Location) -> Self {
        Self {
            kind: DiagnosticKind::NoUrlInSrc,
            location,
            message: "No url".to_string(),
        }
    }

    pub fn missing_font_type_mapping(family: &FamilyName, location: Location) -> Self {
        Self {
            kind: DiagnosticKind::MissingFontTypeMapping,
            location,
            message: format!("Missing font type mapping: {}", family),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}
