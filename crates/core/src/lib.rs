//! # fontfall-core
//!
//! Validation of `@font-face` rules and synthesis of metric-adjusted
//! fallback rules.
//!
//! - **accumulator**: collects the descriptors of one rule, flags duplicates
//! - **validator**: turns a collected rule into ordered diagnostics
//! - **fallback**: builds the fallback `@font-face` rule from metrics
//! - **plugin**: runs the pass over a whole style sheet
//! - **error**: configuration and run errors
//!
//! ## Design Principle
//!
//! The core never reads font files itself. Metrics come from a
//! [`MetricsProvider`] and font files are located through a
//! [`SrcUrlToFilename`], so the pass can run against in-memory tables in
//! tests and against the filesystem in the CLI.

// Re-export foundation crates
pub use fontfall_style as style;
pub use fontfall_traits as traits;
pub use fontfall_types as types;

pub mod accumulator;
pub mod error;
pub mod fallback;
pub mod plugin;
pub mod validator;

pub use accumulator::{Duplicate, FontFaceProperty, FontFaceRecord, Located};
pub use error::{ConfigError, FontfallError};
pub use fallback::{DEFAULT_FALLBACK_SUFFIX, FallbackRuleBuilder, format_percent};
pub use plugin::{FontfallBuilder, FontfallPlugin, ProcessReport};
pub use validator::{FallbackRequest, FontTypes, Validation, validate};

pub use traits::{
    InMemoryMetricsProvider, MetricsError, MetricsProvider, SrcUrlToFilename, src_url_to_filename,
};
pub use types::{Diagnostic, DiagnosticKind, FallbackMetrics, FamilyName, FontClass, Location};
