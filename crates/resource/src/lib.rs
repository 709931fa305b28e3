//! Resolution of `src` URLs to local font files.
//!
//! ## Available Resolvers
//!
//! - [`FilesystemSrcResolver`]: resolves URLs relative to a base directory
//!
//! ## Re-exports
//!
//! For convenience, we also re-export the function type and constructor from
//! fontfall-traits:
//! - [`SrcUrlToFilename`], [`src_url_to_filename`]

mod filesystem;

pub use filesystem::{FilesystemSrcResolver, default_src_url_to_filename};

pub use fontfall_traits::{SrcUrlToFilename, src_url_to_filename};
