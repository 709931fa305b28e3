use serde::{Deserialize, Serialize};

/// Metric overrides that make a local face approximate a web font.
///
/// All values are ratios: `1.0` is rendered as `100%`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackMetrics {
    pub ascent_override: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descent_override: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_gap_override: Option<f64>,
    pub size_adjust: f64,
    /// Name of the locally installed face the overrides were computed for,
    /// emitted as `src: local(...)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_font: Option<String>,
}
