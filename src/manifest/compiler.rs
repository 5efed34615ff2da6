//! Manifest compilation.
//!
//! # Responsibilities
//! - Resolve relative patterns and resource paths against the base path
//! - Validate resource paths as absolute URI paths
//! - Compile pattern keys into whole-string-anchored regexes
//! - Preserve declaration order
//!
//! # Design Decisions
//! - First violation aborts the whole compilation
//! - No resource-existence checks: how the server maps URI paths to
//!   storage is unknown here
//! - Anchors wrap the pattern in a non-capturing group so alternation
//!   cannot escape `^`/`$`

use std::str::FromStr;

use http::uri::PathAndQuery;
use regex::Regex;
use serde_json::Number;

use crate::error::FormatError;
use crate::manifest::destination::RequestDestination;
use crate::manifest::schema::ManifestData;

/// One pushable resource after compilation. The path is absolute.
#[derive(Debug, Clone)]
pub struct ResourceDescriptor {
    /// Absolute URI path of the resource.
    pub path: String,

    /// Declared request destination.
    pub destination: RequestDestination,

    /// Optional priority hint, rendered verbatim into the header.
    pub weight: Option<Number>,
}

/// A pattern key compiled for exact matching, with its resources in
/// declaration order.
#[derive(Debug)]
pub struct CompiledPattern {
    regex: Regex,
    resources: Vec<ResourceDescriptor>,
}

impl CompiledPattern {
    /// True when the entire `path` matches the pattern.
    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Resources declared under this pattern, in declaration order.
    pub fn resources(&self) -> &[ResourceDescriptor] {
        &self.resources
    }

    /// Source of the compiled (anchored) regex.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

/// Compile the raw document into the ordered pattern list.
pub(crate) fn compile(
    data: ManifestData,
    base_path: Option<&str>,
) -> Result<Vec<CompiledPattern>, FormatError> {
    let mut patterns = Vec::with_capacity(data.len());

    for (pattern, entries) in data {
        let pattern = resolve(&pattern, base_path)?;
        let regex = Regex::new(&format!("^(?:{pattern})$"))
            .map_err(|source| FormatError::Pattern { pattern, source })?;

        let mut resources = Vec::with_capacity(entries.len());
        for (path, entry) in entries {
            let path = resolve(&path, base_path)?;
            validate_uri_path(&path)?;
            resources.push(ResourceDescriptor {
                path,
                destination: entry.destination,
                weight: entry.weight,
            });
        }

        patterns.push(CompiledPattern { regex, resources });
    }

    Ok(patterns)
}

/// Resolve a manifest entry to its absolute form.
///
/// Absolute entries pass through untouched. Relative entries are joined
/// onto `base_path`; with no base path they are rejected, keeping the
/// invariant that every compiled entry starts with `/`.
fn resolve(entry: &str, base_path: Option<&str>) -> Result<String, FormatError> {
    if entry.starts_with('/') {
        return Ok(entry.to_string());
    }
    let Some(base) = base_path else {
        return Err(FormatError::RelativePath(entry.to_string()));
    };
    let joined = format!("{}/{}", base.trim_end_matches('/'), entry);
    if !joined.starts_with('/') {
        return Err(FormatError::InvalidPath(joined));
    }
    Ok(joined)
}

/// Check that a resolved resource path parses as a URI path.
fn validate_uri_path(path: &str) -> Result<(), FormatError> {
    PathAndQuery::from_str(path)
        .map(|_| ())
        .map_err(|_| FormatError::InvalidPath(path.to_string()))
}
