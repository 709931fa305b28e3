//! Newtype wrappers for the string identifiers passed between crates.
//!
//! Font-family names and classification labels are both plain strings in a
//! style sheet, but mixing them up produces wrong fallback rules rather than
//! errors, so they get distinct types.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// A font classification label such as `serif`, `sans-serif` or `mono`.
///
/// The label selects which locally installed face a fallback rule is
/// measured against. Labels are caller-defined; the metrics provider decides
/// which ones it understands.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontClass(Arc<str>);

impl FontClass {
    pub const SERIF: &'static str = "serif";
    pub const SANS_SERIF: &'static str = "sans-serif";
    pub const MONO: &'static str = "mono";

    pub fn new(label: impl Into<Arc<str>>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for FontClass {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for FontClass {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for FontClass {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FontClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A font-family name as written in a style sheet, with any quotes removed.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FamilyName(Arc<str>);

impl FamilyName {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for FamilyName {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for FamilyName {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for FamilyName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `HashMap<FamilyName, _>` be queried with a plain `&str`.
impl Borrow<str> for FamilyName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FamilyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
