//! Construction and validation of push manifests.

use push_manifest::{FormatError, PushManifest};
use serde_json::json;

#[test]
fn valid_manifest_compiles() {
    let manifest = PushManifest::new(
        json!({
            "/index.html": {
                "/style.css": { "type": "style", "weight": 1 },
                "/app.js": { "type": "script" }
            },
            "/about.html": {
                "/style.css": { "type": "style" }
            }
        }),
        None,
    )
    .unwrap();

    assert_eq!(manifest.len(), 2);
}

#[test]
fn top_level_must_be_an_object() {
    assert!(matches!(
        PushManifest::new(json!("push"), None),
        Err(FormatError::Document(_))
    ));
    assert!(matches!(
        PushManifest::new(json!([1, 2]), None),
        Err(FormatError::Document(_))
    ));
}

#[test]
fn pattern_value_must_be_an_object() {
    assert!(matches!(
        PushManifest::new(json!({ "/index.html": 42 }), None),
        Err(FormatError::Document(_))
    ));
}

#[test]
fn unknown_destination_is_rejected() {
    assert!(matches!(
        PushManifest::new(
            json!({ "/index.html": { "/x.bin": { "type": "bogus" } } }),
            None,
        ),
        Err(FormatError::Document(_))
    ));
}

#[test]
fn omitted_and_empty_destination_are_accepted() {
    let manifest = PushManifest::new(
        json!({
            "/index.html": {
                "/data.json": {},
                "/blob.bin": { "type": "" }
            }
        }),
        None,
    )
    .unwrap();

    assert_eq!(
        manifest.link_headers("/index.html"),
        ["</data.json>; rel=preload", "</blob.bin>; rel=preload"]
    );
}

#[test]
fn non_numeric_weight_is_rejected() {
    assert!(matches!(
        PushManifest::new(
            json!({ "/index.html": { "/app.js": { "type": "script", "weight": "1" } } }),
            None,
        ),
        Err(FormatError::Document(_))
    ));
}

#[test]
fn relative_entries_resolve_against_the_base_path() {
    let manifest = PushManifest::new(
        json!({ "app.html": { "app.js": { "type": "script" } } }),
        Some("/static/"),
    )
    .unwrap();

    assert_eq!(
        manifest.link_headers("/static/app.html"),
        ["</static/app.js>; rel=preload; as=script"]
    );
    assert!(manifest.link_headers("/app.html").is_empty());
}

#[test]
fn relative_entry_without_base_path_is_rejected() {
    assert!(matches!(
        PushManifest::new(json!({ "app.html": {} }), None),
        Err(FormatError::RelativePath(_))
    ));
    assert!(matches!(
        PushManifest::new(
            json!({ "/index.html": { "app.js": { "type": "script" } } }),
            None,
        ),
        Err(FormatError::RelativePath(_))
    ));
}

#[test]
fn invalid_resource_path_is_rejected() {
    assert!(matches!(
        PushManifest::new(
            json!({ "/index.html": { "/has space.js": { "type": "script" } } }),
            None,
        ),
        Err(FormatError::InvalidPath(_))
    ));
}

#[test]
fn invalid_pattern_regex_is_rejected() {
    assert!(matches!(
        PushManifest::new(json!({ "/articles/(": {} }), None),
        Err(FormatError::Pattern { .. })
    ));
}

#[test]
fn one_violation_fails_the_whole_manifest() {
    // The first pattern is fine; the bad entry under the second still
    // aborts construction.
    let result = PushManifest::new(
        json!({
            "/index.html": { "/app.js": { "type": "script" } },
            "/about.html": { "/x.bin": { "type": "bogus" } }
        }),
        None,
    );
    assert!(result.is_err());
}
