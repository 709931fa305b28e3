//! Filesystem-based resolution of `src` URLs.
//!
//! A style sheet usually refers to its fonts with URLs that only make sense
//! to a web server (`/fonts/a.woff2`, `../fonts/a.ttf?v=2`). This resolver
//! turns them into paths below a base directory so the font files can be
//! measured at build time.

use fontfall_traits::SrcUrlToFilename;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Resolves `src` URLs relative to a base directory.
///
/// - `?query` and `#fragment` suffixes are dropped.
/// - Root-relative URLs (`/fonts/a.ttf`) are resolved below the base
///   directory, not the filesystem root.
/// - `file://` URLs are used as-is.
#[derive(Debug, Clone)]
pub struct FilesystemSrcResolver {
    base_path: PathBuf,
}

impl FilesystemSrcResolver {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base(&self) -> &Path {
        &self.base_path
    }

    pub fn resolve(&self, url: &str) -> PathBuf {
        let url = url.trim();
        let url = url.split(['?', '#']).next().unwrap_or(url);

        if let Some(local) = url.strip_prefix("file://") {
            return PathBuf::from(local);
        }

        let relative = url.trim_start_matches('/');
        let resolved = self.base_path.join(relative);
        log::trace!("Resolved src url '{}' to '{}'", url, resolved.display());
        resolved
    }

    /// Converts this resolver into the function value held by the plugin
    /// configuration.
    pub fn into_fn(self) -> SrcUrlToFilename {
        Arc::new(move |url: &str| self.resolve(url))
    }
}

impl Default for FilesystemSrcResolver {
    fn default() -> Self {
        Self::new(".")
    }
}

/// The policy used when no `src_url_to_filename` is configured: resolve
/// relative to the current working directory.
pub fn default_src_url_to_filename() -> SrcUrlToFilename {
    FilesystemSrcResolver::default().into_fn()
}
