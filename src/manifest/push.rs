//! The compiled push manifest.
//!
//! # Responsibilities
//! - Own the compiled pattern list
//! - Evaluate request paths against the patterns
//! - Produce formatted preload Link header values
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) pattern scan; every match contributes, duplicates preserved
//! - No-match is a normal empty result, not an error

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::FormatError;
use crate::headers::PreloadLink;
use crate::manifest::compiler::{self, CompiledPattern};
use crate::manifest::schema::ManifestData;

/// Maps request paths to the resources that should be pushed alongside
/// them via HTTP/2 server push.
///
/// The keys of the source document are exact-match regular expression
/// patterns tested against the request path. With `base_path` set,
/// relative patterns and resources are interpreted relative to that
/// directory; typically it is the path from the server file root to the
/// manifest file.
///
/// Resources are never checked for existence on disk: how the server maps
/// URI paths to storage is unknown here.
#[derive(Debug)]
pub struct PushManifest {
    patterns: Vec<CompiledPattern>,
}

impl PushManifest {
    /// Compile a parsed push-manifest document (the multi-file JSON
    /// format).
    ///
    /// Fails with [`FormatError`] if the document does not match the
    /// manifest format, a resource is not a valid URI path, or a `type`
    /// is not a known request destination.
    pub fn new(document: Value, base_path: Option<&str>) -> Result<Self, FormatError> {
        let data: ManifestData = serde_json::from_value(document)?;
        Self::from_data(data, base_path)
    }

    /// Compile an already-typed manifest document.
    pub fn from_data(data: ManifestData, base_path: Option<&str>) -> Result<Self, FormatError> {
        let patterns = compiler::compile(data, base_path)?;
        debug!(patterns = patterns.len(), "push manifest compiled");
        Ok(Self { patterns })
    }

    /// Number of compiled patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True when the manifest declares no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Generate `Link: rel=preload` header values for each push resource
    /// associated with `path`.
    ///
    /// Patterns are evaluated in declaration order and every full match
    /// contributes its resources, also in declaration order. A path that
    /// matches no pattern yields an empty vector.
    ///
    /// A cooperating HTTP/2 server may intercept these values and
    /// initiate a server push for each resource.
    pub fn link_headers(&self, path: &str) -> Vec<String> {
        let headers: Vec<String> = self
            .patterns
            .iter()
            .filter(|pattern| pattern.matches(path))
            .flat_map(|pattern| pattern.resources())
            .map(|resource| PreloadLink::new(resource).to_string())
            .collect();

        if !headers.is_empty() {
            trace!(path, count = headers.len(), "generated preload headers");
        }
        headers
    }
}
