//! Turns an accumulated `@font-face` record into diagnostics and, when the
//! rule is complete, a request for a fallback rule.

use crate::accumulator::FontFaceRecord;
use fontfall_types::{Diagnostic, FamilyName, FontClass, Location};
use std::collections::HashMap;

/// Mapping from exact font-family name to classification label.
pub type FontTypes = HashMap<FamilyName, FontClass>;

/// Everything needed to synthesize the fallback rule for one original rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackRequest {
    pub family: FamilyName,
    pub class: FontClass,
    /// The first `src` URL, not yet resolved to a file.
    pub url: String,
    pub weight: Option<String>,
    pub style: Option<String>,
}

/// The outcome of validating one rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub diagnostics: Vec<Diagnostic>,
    /// `None` when a suppressing diagnostic was raised.
    pub fallback: Option<FallbackRequest>,
}

impl Validation {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Validates one record. `rule_location` is where the `@font-face` rule
/// starts and is used for diagnostics about missing descriptors.
pub fn validate(
    record: &FontFaceRecord,
    rule_location: Location,
    font_types: &FontTypes,
) -> Validation {
    let mut diagnostics: Vec<Diagnostic> = record
        .duplicates
        .iter()
        .map(|duplicate| Diagnostic::duplicate_declaration(duplicate.location))
        .collect();

    if record.family.is_none() {
        diagnostics.push(Diagnostic::missing_font_family(rule_location));
    }

    let url = match record.src_entries.first() {
        None => {
            diagnostics.push(Diagnostic::missing_src(rule_location));
            None
        }
        Some(first) => match record.first_url().and_then(|entry| entry.url.as_deref()) {
            Some(url) => Some(url),
            None => {
                diagnostics.push(Diagnostic::no_url_in_src(first.location));
                None
            }
        },
    };

    let mut fallback = None;
    if let (Some(family), Some(url)) = (&record.family, url) {
        match font_types.get(&family.value) {
            Some(class) => {
                fallback = Some(FallbackRequest {
                    family: family.value.clone(),
                    class: class.clone(),
                    url: url.to_string(),
                    weight: record.weight.as_ref().map(|w| w.value.clone()),
                    style: record.style.as_ref().map(|s| s.value.clone()),
                });
            }
            None => diagnostics.push(Diagnostic::missing_font_type_mapping(
                &family.value,
                family.location,
            )),
        }
    }

    debug_assert!(
        fallback.is_none() || !diagnostics.iter().any(|d| d.kind.suppresses_fallback()),
        "fallback requested despite a suppressing diagnostic"
    );
    Validation { diagnostics, fallback }
}
