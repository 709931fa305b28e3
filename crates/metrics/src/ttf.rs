//! Metrics extraction from TrueType/OpenType files.

use crate::fallback::FallbackFace;
use fontfall_traits::{MetricsError, MetricsProvider};
use fontfall_types::{FallbackMetrics, FontClass};
use std::collections::HashMap;
use std::future::Future;
use std::path::Path;

const AZ: &str = "abcdefghijklmnopqrstuvwxyz";

/// The metrics of a web font needed to derive fallback overrides, in font
/// units.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceMetrics {
    pub ascender: f64,
    /// Negative below the baseline, as stored in `hhea`.
    pub descender: f64,
    pub line_gap: f64,
    pub units_per_em: f64,
    pub az_avg_width: f64,
}

impl FaceMetrics {
    /// Reads the metrics from a parsed face.
    ///
    /// Returns `None` if the face maps none of `a`–`z` to a glyph with an
    /// advance.
    pub fn from_face(face: &ttf_parser::Face<'_>) -> Option<Self> {
        let advances: Vec<u16> = AZ
            .chars()
            .filter_map(|c| face.glyph_index(c))
            .filter_map(|glyph| face.glyph_hor_advance(glyph))
            .collect();
        if advances.is_empty() {
            return None;
        }
        let az_avg_width =
            advances.iter().map(|&a| f64::from(a)).sum::<f64>() / advances.len() as f64;

        Some(Self {
            ascender: f64::from(face.ascender()),
            descender: f64::from(face.descender()),
            line_gap: f64::from(face.line_gap()),
            units_per_em: f64::from(face.units_per_em()),
            az_avg_width,
        })
    }

    /// Parses font bytes read from `path` (used for error messages only).
    pub fn parse(data: &[u8], path: &Path) -> Result<Self, MetricsError> {
        let face = ttf_parser::Face::parse(data, 0).map_err(|e| MetricsError::InvalidFont {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_face(&face).ok_or_else(|| MetricsError::MissingGlyphs {
            path: path.display().to_string(),
        })
    }
}

/// Derives the overrides that scale `fallback` to the width of `target` and
/// align its vertical metrics.
pub fn fallback_metrics(target: &FaceMetrics, fallback: &FallbackFace) -> FallbackMetrics {
    let size_adjust = (target.az_avg_width / target.units_per_em) / fallback.az_avg_width_em();
    let scaled_em = target.units_per_em * size_adjust;

    FallbackMetrics {
        ascent_override: target.ascender / scaled_em,
        descent_override: Some(target.descender.abs() / scaled_em),
        line_gap_override: Some(target.line_gap / scaled_em),
        size_adjust,
        local_font: Some(fallback.local_name.clone()),
    }
}

/// A metrics provider that reads font files from disk.
///
/// The classification label picks the local fallback face. `serif`,
/// `sans-serif` and `mono` are known out of the box; others can be added
/// with [`with_fallback`](Self::with_fallback).
#[derive(Debug, Clone)]
pub struct TtfMetricsProvider {
    fallbacks: HashMap<FontClass, FallbackFace>,
}

impl TtfMetricsProvider {
    pub fn new() -> Self {
        let fallbacks = [FontClass::SERIF, FontClass::SANS_SERIF, FontClass::MONO]
            .into_iter()
            .filter_map(|label| {
                let class = FontClass::new(label);
                FallbackFace::builtin(&class).map(|face| (class, face))
            })
            .collect();
        Self { fallbacks }
    }

    /// Registers (or replaces) the fallback face for a label.
    pub fn with_fallback(mut self, class: impl Into<FontClass>, face: FallbackFace) -> Self {
        self.fallbacks.insert(class.into(), face);
        self
    }

    pub fn fallback_for(&self, class: &FontClass) -> Option<&FallbackFace> {
        self.fallbacks.get(class)
    }
}

impl Default for TtfMetricsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsProvider for TtfMetricsProvider {
    fn compute_metrics(
        &self,
        path: &Path,
        class: &FontClass,
    ) -> impl Future<Output = Result<FallbackMetrics, MetricsError>> + Send {
        let fallback = self.fallbacks.get(class).cloned();
        let path = path.to_path_buf();
        let class = class.clone();

        async move {
            let fallback =
                fallback.ok_or_else(|| MetricsError::UnsupportedClass(class.to_string()))?;
            let data = tokio::fs::read(&path)
                .await
                .map_err(|e| MetricsError::from_io(&path, e))?;
            log::debug!("Read {} bytes from '{}'", data.len(), path.display());

            let target = FaceMetrics::parse(&data, &path)?;
            let metrics = fallback_metrics(&target, &fallback);
            log::debug!(
                "Metrics for '{}' against '{}': size-adjust {:.4}, ascent {:.4}",
                path.display(),
                fallback.local_name,
                metrics.size_adjust,
                metrics.ascent_override
            );
            Ok(metrics)
        }
    }

    fn name(&self) -> &'static str {
        "TtfMetricsProvider"
    }
}
