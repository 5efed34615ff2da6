//! Raw manifest document model.
//!
//! Serde types for the multi-file push-manifest JSON format. Deserialization
//! covers the structural half of validation; semantic checks (path
//! resolution, pattern compilation) live in the compiler.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::manifest::destination::RequestDestination;

/// The manifest document one level up from raw JSON: pattern → resource
/// path → entry. `IndexMap` keeps declaration order, which is also the
/// order of generated headers.
pub type ManifestData = IndexMap<String, IndexMap<String, ResourceEntry>>;

/// One resource entry as written in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceEntry {
    /// Request destination of the resource. Missing or empty means
    /// unspecified; generated headers then omit the `as=` parameter.
    #[serde(rename = "type", default)]
    pub destination: RequestDestination,

    /// Optional priority hint, passed through to the header verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Number>,
}
