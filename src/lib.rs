//! # fontfall
//!
//! Checks the `@font-face` rules of a style sheet and adds a fallback rule
//! after each complete one. The fallback points at a locally installed face
//! whose metrics are overridden to match the web font, which keeps text from
//! jumping around when the web font finishes loading.
//!
//! ```ignore
//! use fontfall::{FontfallBuilder, TtfMetricsProvider, process_css};
//! use std::sync::Arc;
//!
//! let plugin = FontfallBuilder::new()
//!     .font_type("Roboto", "sans-serif")
//!     .build(Arc::new(TtfMetricsProvider::new()))?;
//! let processed = process_css(css, &plugin).await?;
//! ```

pub mod config;

pub use config::Config;
pub use fontfall_core::{
    ConfigError, Diagnostic, DiagnosticKind, FallbackMetrics, FamilyName, FontClass, FontTypes,
    FontfallBuilder, FontfallError, FontfallPlugin, InMemoryMetricsProvider, MetricsError,
    MetricsProvider, ProcessReport, SrcUrlToFilename, src_url_to_filename,
};
pub use fontfall_metrics::{FallbackFace, TtfMetricsProvider};
pub use fontfall_resource::{FilesystemSrcResolver, default_src_url_to_filename};
pub use fontfall_style::Stylesheet;

/// The rewritten style sheet together with the run report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedCss {
    pub css: String,
    pub report: ProcessReport,
}

/// Parses `css`, runs the font-face pass and serializes the result.
pub async fn process_css<M>(
    css: &str,
    plugin: &FontfallPlugin<M>,
) -> Result<ProcessedCss, FontfallError>
where
    M: MetricsProvider + 'static,
{
    let mut stylesheet = Stylesheet::parse(css)?;
    let report = plugin.process(&mut stylesheet).await?;
    Ok(ProcessedCss {
        css: stylesheet.to_string(),
        report,
    })
}
