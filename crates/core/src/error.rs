//! Error types for configuring and running the font-face pass.

use fontfall_style::StyleParseError;
use fontfall_traits::MetricsError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing font_types: a mapping from font-family to font type is required")]
    MissingFontTypes,
    #[error("Invalid config file '{path}': {message}")]
    InvalidConfigFile { path: String, message: String },
}

/// The main error enum for a processing run. Per-rule problems are reported
/// as diagnostics instead; any of these aborts the run.
#[derive(Error, Debug)]
pub enum FontfallError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Stylesheet parsing error: {0}")]
    Parse(#[from] StyleParseError),
    #[error("Failed to compute metrics for '{path}': {source}")]
    Metrics {
        path: String,
        #[source]
        source: MetricsError,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Metrics task failed: {0}")]
    Task(String),
}

impl From<tokio::task::JoinError> for FontfallError {
    fn from(e: tokio::task::JoinError) -> Self {
        FontfallError::Task(e.to_string())
    }
}
