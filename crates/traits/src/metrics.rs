//! MetricsProvider trait for abstracting fallback metrics computation.
//!
//! Fallback rules need the metrics of the web font relative to a locally
//! installed face. The processing core asks a provider for them without
//! knowing whether they come from parsing a font file, a precomputed table or
//! a remote service.

use fontfall_types::{FallbackMetrics, FontClass};
use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use thiserror::Error;

/// Error type for metrics lookups. Any of these aborts the processing run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    #[error("Font file not found: {0}")]
    NotFound(String),

    #[error("Failed to read font file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Invalid font file '{path}': {message}")]
    InvalidFont { path: String, message: String },

    #[error("No fallback font known for font type '{0}'")]
    UnsupportedClass(String),

    #[error("Font file '{path}' has no glyphs for the latin alphabet")]
    MissingGlyphs { path: String },

    #[error("Metrics lookup aborted: {0}")]
    Aborted(String),
}

impl MetricsError {
    /// Classifies an I/O error raised while reading `path`.
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            MetricsError::NotFound(path.display().to_string())
        } else {
            MetricsError::Io {
                path: path.display().to_string(),
                message: err.to_string(),
            }
        }
    }
}

/// A source of fallback metrics for font files.
///
/// # Implementations
///
/// - `TtfMetricsProvider` (fontfall-metrics): parses the font file
/// - [`InMemoryMetricsProvider`]: pre-populated table, mainly for tests
pub trait MetricsProvider: Send + Sync + Debug {
    /// Computes the metric overrides that make the local face chosen for
    /// `class` approximate the font stored at `path`.
    fn compute_metrics(
        &self,
        path: &Path,
        class: &FontClass,
    ) -> impl Future<Output = Result<FallbackMetrics, MetricsError>> + Send;

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// A metrics provider backed by a pre-populated table keyed by font path.
///
/// The classification label is not consulted; whatever was stored for the
/// path is returned.
#[derive(Debug, Default)]
pub struct InMemoryMetricsProvider {
    metrics: RwLock<HashMap<PathBuf, FallbackMetrics>>,
}

impl InMemoryMetricsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores metrics for `path`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns `MetricsError::Aborted` if the internal lock is poisoned.
    pub fn add(
        &self,
        path: impl Into<PathBuf>,
        metrics: FallbackMetrics,
    ) -> Result<(), MetricsError> {
        let mut table = self
            .metrics
            .write()
            .map_err(|_| MetricsError::Aborted("metrics table lock poisoned".to_string()))?;
        table.insert(path.into(), metrics);
        Ok(())
    }

    /// Builder-style variant of [`add`](Self::add).
    pub fn with(self, path: impl Into<PathBuf>, metrics: FallbackMetrics) -> Self {
        if let Ok(mut table) = self.metrics.write() {
            table.insert(path.into(), metrics);
        }
        self
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.metrics.read().map(|t| t.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup(&self, path: &Path) -> Result<FallbackMetrics, MetricsError> {
        let table = self
            .metrics
            .read()
            .map_err(|_| MetricsError::Aborted("metrics table lock poisoned".to_string()))?;
        table
            .get(path)
            .cloned()
            .ok_or_else(|| MetricsError::NotFound(path.display().to_string()))
    }
}

impl MetricsProvider for InMemoryMetricsProvider {
    fn compute_metrics(
        &self,
        path: &Path,
        _class: &FontClass,
    ) -> impl Future<Output = Result<FallbackMetrics, MetricsError>> + Send {
        std::future::ready(self.lookup(path))
    }

    fn name(&self) -> &'static str {
        "InMemoryMetricsProvider"
    }
}
