//! Synthesis of the fallback `@font-face` rule.

use crate::validator::FallbackRequest;
use fontfall_style::{AtRule, Declaration, to_css_string};
use fontfall_types::FallbackMetrics;

pub const DEFAULT_FALLBACK_SUFFIX: &str = "Fallback";

/// Builds fallback rules from validated requests and computed metrics.
#[derive(Debug, Clone)]
pub struct FallbackRuleBuilder {
    family_suffix: String,
}

impl FallbackRuleBuilder {
    pub fn new(family_suffix: impl Into<String>) -> Self {
        Self {
            family_suffix: family_suffix.into(),
        }
    }

    pub fn family_suffix(&self) -> &str {
        &self.family_suffix
    }

    /// The family name of the fallback face, e.g. `Roboto Fallback`.
    pub fn fallback_family(&self, family: &str) -> String {
        if self.family_suffix.is_empty() {
            family.to_string()
        } else {
            format!("{} {}", family, self.family_suffix)
        }
    }

    pub fn build(&self, request: &FallbackRequest, metrics: &FallbackMetrics) -> AtRule {
        let mut declarations = vec![Declaration::new(
            "font-family",
            to_css_string(&self.fallback_family(request.family.as_str())),
        )];
        if let Some(style) = &request.style {
            declarations.push(Declaration::new("font-style", style.as_str()));
        }
        if let Some(weight) = &request.weight {
            declarations.push(Declaration::new("font-weight", weight.as_str()));
        }
        if let Some(local) = &metrics.local_font {
            declarations.push(Declaration::new("src", format!("local({})", to_css_string(local))));
        }
        declarations.push(Declaration::new(
            "ascent-override",
            format_percent(metrics.ascent_override),
        ));
        if let Some(descent) = metrics.descent_override {
            declarations.push(Declaration::new("descent-override", format_percent(descent)));
        }
        if let Some(line_gap) = metrics.line_gap_override {
            declarations.push(Declaration::new("line-gap-override", format_percent(line_gap)));
        }
        declarations.push(Declaration::new("size-adjust", format_percent(metrics.size_adjust)));

        AtRule::font_face(declarations)
    }
}

impl Default for FallbackRuleBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_SUFFIX)
    }
}

/// Formats a ratio as a percentage with at most two decimals.
///
/// `1.0623` becomes `106.23%`, `0.5` becomes `50%`.
pub fn format_percent(ratio: f64) -> String {
    let percent = (ratio * 10000.0).round() / 100.0;
    // Avoid printing `-0%`.
    let percent = if percent == 0.0 { 0.0 } else { percent };
    format!("{}%", percent)
}
