//! Shared fixtures for integration tests.

use serde_json::{json, Value};

/// Manifest used across the suites: a document pattern with two resources
/// plus a wildcard article pattern.
pub fn sample_manifest() -> Value {
    json!({
        "/index.html": {
            "/style.css": { "type": "style", "weight": 1 },
            "/app.js": { "type": "script" }
        },
        "/articles/.*": {
            "/images/banner.png": { "type": "image" }
        }
    })
}
