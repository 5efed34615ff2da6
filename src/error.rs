//! Error types for manifest construction.

use thiserror::Error;

/// Error raised while compiling a push manifest.
///
/// Construction is all-or-nothing: the first violation aborts compilation
/// and no partially-compiled manifest is ever returned.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The document does not match the manifest schema (wrong value type,
    /// non-object entry, non-numeric weight, unknown destination token).
    #[error("malformed push manifest: {0}")]
    Document(#[from] serde_json::Error),

    /// A pattern or resource path is relative and no base path was given.
    #[error("relative entry {0:?} requires a base path")]
    RelativePath(String),

    /// A resolved entry is not an absolute URI path.
    #[error("invalid resource path {0:?}")]
    InvalidPath(String),

    /// A pattern key failed to compile as a regular expression.
    #[error("invalid pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },
}
