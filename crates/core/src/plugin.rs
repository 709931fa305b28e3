//! The font-face pass over a whole style sheet.
//!
//! Every `@font-face` rule is accumulated and validated synchronously. Rules
//! that validate get their metrics looked up concurrently on a
//! [`JoinSet`]; once all lookups succeed the fallback rules are inserted
//! right after their originals.

use crate::accumulator::FontFaceRecord;
use crate::error::{ConfigError, FontfallError};
use crate::fallback::{DEFAULT_FALLBACK_SUFFIX, FallbackRuleBuilder};
use crate::validator::{FallbackRequest, FontTypes, validate};
use fontfall_resource::default_src_url_to_filename;
use fontfall_style::{Node, NodePath, Stylesheet};
use fontfall_traits::{MetricsProvider, SrcUrlToFilename};
use fontfall_types::{Diagnostic, FallbackMetrics, FamilyName, FontClass};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Configures a [`FontfallPlugin`].
///
/// `font_types` is required; everything else has a default.
#[derive(Default)]
pub struct FontfallBuilder {
    font_types: Option<FontTypes>,
    src_url_to_filename: Option<SrcUrlToFilename>,
    fallback_suffix: Option<String>,
}

impl FontfallBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the family-name to classification-label mapping, replacing any
    /// previous one.
    pub fn font_types<I, K, V>(mut self, font_types: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<FamilyName>,
        V: Into<FontClass>,
    {
        self.font_types = Some(
            font_types
                .into_iter()
                .map(|(family, class)| (family.into(), class.into()))
                .collect(),
        );
        self
    }

    /// Adds a single mapping entry.
    pub fn font_type(mut self, family: impl Into<FamilyName>, class: impl Into<FontClass>) -> Self {
        self.font_types
            .get_or_insert_with(FontTypes::new)
            .insert(family.into(), class.into());
        self
    }

    pub fn src_url_to_filename(mut self, resolve: SrcUrlToFilename) -> Self {
        self.src_url_to_filename = Some(resolve);
        self
    }

    pub fn fallback_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.fallback_suffix = Some(suffix.into());
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFontTypes`] if no mapping was given.
    pub fn build<M>(self, provider: Arc<M>) -> Result<FontfallPlugin<M>, ConfigError>
    where
        M: MetricsProvider + 'static,
    {
        let font_types = self.font_types.ok_or(ConfigError::MissingFontTypes)?;
        let src_url_to_filename =
            self.src_url_to_filename.unwrap_or_else(default_src_url_to_filename);
        let suffix = self
            .fallback_suffix
            .unwrap_or_else(|| DEFAULT_FALLBACK_SUFFIX.to_string());

        log::debug!(
            "Configured font-face pass: {} font type(s), provider '{}', suffix '{}'",
            font_types.len(),
            provider.name(),
            suffix
        );
        Ok(FontfallPlugin {
            font_types: Arc::new(font_types),
            src_url_to_filename,
            provider,
            rule_builder: FallbackRuleBuilder::new(suffix),
        })
    }
}

impl fmt::Debug for FontfallBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontfallBuilder")
            .field("font_types", &self.font_types)
            .field("src_url_to_filename", &self.src_url_to_filename.as_ref().map(|_| "<fn>"))
            .field("fallback_suffix", &self.fallback_suffix)
            .finish()
    }
}

/// A configured font-face pass. Reusable across style sheets.
pub struct FontfallPlugin<M> {
    font_types: Arc<FontTypes>,
    src_url_to_filename: SrcUrlToFilename,
    provider: Arc<M>,
    rule_builder: FallbackRuleBuilder,
}

/// A validated rule waiting for its metrics.
struct PendingFallback {
    path: NodePath,
    request: FallbackRequest,
    file: PathBuf,
}

impl<M> FontfallPlugin<M>
where
    M: MetricsProvider + 'static,
{
    pub fn font_types(&self) -> &FontTypes {
        &self.font_types
    }

    pub fn provider(&self) -> &M {
        &self.provider
    }

    /// Validates every `@font-face` rule in `stylesheet` and inserts a
    /// fallback rule after each one that validates.
    ///
    /// # Errors
    ///
    /// Any metrics lookup failure aborts the run; the remaining lookups are
    /// cancelled and `stylesheet` is left untouched.
    pub async fn process(
        &self,
        stylesheet: &mut Stylesheet,
    ) -> Result<ProcessReport, FontfallError> {
        let (diagnostics, pending) = self.plan(stylesheet);
        log::debug!(
            "{} diagnostic(s), {} fallback rule(s) to synthesize",
            diagnostics.len(),
            pending.len()
        );

        let metrics = self.lookup_metrics(&pending).await?;

        let mut inserted = 0;
        // Back to front, so earlier paths stay valid.
        for (fallback, metrics) in pending.iter().zip(metrics).rev() {
            let rule = self.rule_builder.build(&fallback.request, &metrics);
            if stylesheet.insert_after(&fallback.path, Node::AtRule(rule)) {
                inserted += 1;
            } else {
                log::warn!("Could not insert fallback rule for '{}'", fallback.request.family);
            }
        }

        log::info!(
            "Processed font-face rules: {} fallback rule(s) inserted, {} warning(s)",
            inserted,
            diagnostics.len()
        );
        Ok(ProcessReport { diagnostics, inserted })
    }

    /// Runs the synchronous part of the pass: accumulate and validate each
    /// rule in document order.
    fn plan(&self, stylesheet: &Stylesheet) -> (Vec<Diagnostic>, Vec<PendingFallback>) {
        let mut diagnostics = Vec::new();
        let mut pending = Vec::new();

        for (path, at_rule) in stylesheet.font_faces() {
            let declarations = at_rule.font_face_declarations();
            let record = FontFaceRecord::from_declarations(&declarations);
            let validation = validate(&record, at_rule.location, &self.font_types);
            diagnostics.extend(validation.diagnostics);

            if let Some(request) = validation.fallback {
                let file = (self.src_url_to_filename)(&request.url);
                log::debug!(
                    "Font-face '{}' at {} resolved to '{}'",
                    request.family,
                    at_rule.location,
                    file.display()
                );
                pending.push(PendingFallback { path, request, file });
            }
        }
        (diagnostics, pending)
    }

    /// Looks up metrics for all pending rules concurrently. The result is in
    /// the same order as `pending`.
    async fn lookup_metrics(
        &self,
        pending: &[PendingFallback],
    ) -> Result<Vec<FallbackMetrics>, FontfallError> {
        let mut lookups = JoinSet::new();
        for (index, fallback) in pending.iter().enumerate() {
            let provider = Arc::clone(&self.provider);
            let file = fallback.file.clone();
            let class = fallback.request.class.clone();
            lookups.spawn(async move {
                let result = provider.compute_metrics(&file, &class).await;
                (index, result)
            });
        }

        let mut results: Vec<Option<FallbackMetrics>> = vec![None; pending.len()];
        while let Some(joined) = lookups.join_next().await {
            let (index, result) = joined?;
            match result {
                Ok(metrics) => results[index] = Some(metrics),
                Err(source) => {
                    // Returning drops `lookups`, which aborts the rest.
                    return Err(FontfallError::Metrics {
                        path: pending[index].file.display().to_string(),
                        source,
                    });
                }
            }
        }

        results
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                FontfallError::Task("metrics lookup finished without a result".to_string())
            })
    }
}

impl<M: fmt::Debug> fmt::Debug for FontfallPlugin<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontfallPlugin")
            .field("font_types", &self.font_types)
            .field("provider", &self.provider)
            .field("rule_builder", &self.rule_builder)
            .finish_non_exhaustive()
    }
}

/// What a processing run produced besides the rewritten style sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessReport {
    /// Warnings of all rules, in document order.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of fallback rules inserted.
    pub inserted: usize,
}

impl ProcessReport {
    pub fn has_warnings(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.diagnostics.iter().map(|d| d.message.as_str()).collect()
    }

    /// Renders each diagnostic as `<source>:<line>:<col>: <message>`.
    pub fn format_warnings(&self, source: &str) -> Vec<String> {
        self.diagnostics
            .iter()
            .map(|diagnostic| format!("{}:{}", source, diagnostic))
            .collect()
    }
}
