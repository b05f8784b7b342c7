/*
 * test_json_roundtrip.rs
 * Copyright (c) 2025 Posit, PBC
 */

use refract_json::{element_to_json, parse_result_from_json, to_json_string};
use refract_model::{
    Annotation, Content, Element, GenericElement, ParseResult, SourceMap, default_registry,
};
use serde_json::json;

/// A parse result shaped like real parser output: one api category with
/// nested content and attached source maps, plus a warning and an error.
fn sample_parse_result() -> ParseResult {
    let mut title = Element::string("Polls API");
    title.attach_source_map(SourceMap::from_ranges([(0, 9)]));

    let api: Element = GenericElement::new("category", Content::Elements(vec![title]))
        .with_class("api")
        .into();

    let mut warning = Annotation::warning("deprecated auth scheme", 6u64);
    warning
        .attributes
        .set("sourceMap", SourceMap::from_ranges([(40, 12)]));

    let error = Annotation::error("missing `host` field", 3u64);

    ParseResult::from_elements(vec![api, warning.into(), error.into()])
}

#[test]
fn test_roundtrip_preserves_the_tree() {
    let original = sample_parse_result();

    let wire = element_to_json(&original.clone().into());
    let restored = parse_result_from_json(&wire, default_registry()).unwrap();

    assert_eq!(restored, original);
}

#[test]
fn test_roundtrip_restores_specialized_kinds() {
    let original = sample_parse_result();

    let wire = element_to_json(&original.into());
    let restored = parse_result_from_json(&wire, default_registry()).unwrap();

    // Annotations come back as annotations, with their filters intact
    assert_eq!(restored.annotations().count(), 2);
    assert_eq!(restored.warnings().count(), 1);
    assert_eq!(restored.errors().count(), 1);
    assert!(restored.has_errors());

    // The attached source map comes back as a SourceMap element with the
    // two-level value shape
    let warning = restored.warnings().next().unwrap();
    assert_eq!(warning.source_map_value(), Some(json!([40.0, 12.0])));
    assert!(
        warning
            .attributes
            .get("sourceMap")
            .and_then(Element::as_source_map)
            .is_some()
    );

    // The api accessor still resolves after the trip
    let api = restored.api().expect("api category survives");
    assert_eq!(api.name(), "category");
}

#[test]
fn test_wire_form_is_stable_json() {
    let original = sample_parse_result();
    let text = to_json_string(&original.clone().into());

    // The string form parses back to the same document
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let restored = parse_result_from_json(&value, default_registry()).unwrap();
    assert_eq!(restored, original);
}
