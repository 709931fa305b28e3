//! The pluggable mapping from a `src` URL to a local font file.

use std::path::PathBuf;
use std::sync::Arc;

/// Maps the URL written in a `src` descriptor to the font file to measure.
///
/// Shared read-only by every rule processed in a run.
pub type SrcUrlToFilename = Arc<dyn Fn(&str) -> PathBuf + Send + Sync>;

/// Wraps a closure as a [`SrcUrlToFilename`].
///
/// ```ignore
/// let resolve = src_url_to_filename(|url| {
///     Path::new("./test/fonts").join(url.trim_start_matches('/'))
/// });
/// ```
pub fn src_url_to_filename<F>(f: F) -> SrcUrlToFilename
where
    F: Fn(&str) -> PathBuf + Send + Sync + 'static,
{
    Arc::new(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_closure_is_shared() {
        let resolve =
            src_url_to_filename(|url| Path::new("fonts").join(url.trim_start_matches('/')));
        let other = Arc::clone(&resolve);

        assert_eq!(
            resolve("/roboto/Roboto-Regular.ttf"),
            PathBuf::from("fonts/roboto/Roboto-Regular.ttf")
        );
        assert_eq!(other("a.ttf"), PathBuf::from("fonts/a.ttf"));
    }
}
