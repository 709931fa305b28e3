//! # fontfall-metrics
//!
//! Computes the metric overrides (`size-adjust`, `ascent-override`,
//! `descent-override`, `line-gap-override`) that make a locally installed
//! face approximate a web font.
//!
//! The web font is read with `ttf-parser`. The local faces are not read at
//! all: their relevant metrics are known in advance and kept in
//! [`FallbackFace`] entries, one per font classification label.

pub mod fallback;
pub mod ttf;

pub use fallback::FallbackFace;
pub use ttf::{FaceMetrics, TtfMetricsProvider, fallback_metrics};
