//! Nested field and slug behaviour as seen by callers of the domain crate.

use serde_json::{json, Value};

use domain::nested::normalize_optional;
use domain::{how_to_reach_default, normalize_keyed_map, slugify, JsonMap};

fn map(value: Value) -> JsonMap {
    value.as_object().cloned().expect("object literal")
}

// =============================================================================
// Normalizer
// =============================================================================

#[test]
fn test_null_yields_fallback() {
    let fallback = how_to_reach_default();
    assert_eq!(normalize_keyed_map(&Value::Null, &fallback, "how_to_reach"), fallback);
    assert_eq!(normalize_optional(None, &fallback, "how_to_reach"), fallback);
}

#[test]
fn test_mapping_is_identity() {
    let stored = json!({
        "1700000000000abc": {"id": "1700000000000abc", "name": "Manang"},
        "item_3": {"name": "Thorong La"},
    });
    assert_eq!(
        normalize_keyed_map(&stored, &JsonMap::new(), "places_to_visit"),
        map(stored)
    );
}

#[test]
fn test_array_keys_follow_ids_or_index() {
    let stored = json!([
        {"id": "p1", "name": "Manang"},
        {"name": "Thorong La"},
        {"id": "p3", "name": "Muktinath"},
    ]);

    let normalized = normalize_keyed_map(&stored, &JsonMap::new(), "places_to_visit");
    let keys: Vec<&str> = normalized.keys().map(String::as_str).collect();

    assert_eq!(keys.len(), 3);
    for expected in ["p1", "item_1", "p3"] {
        assert!(keys.contains(&expected), "missing key {expected}");
    }
    assert_eq!(normalized["item_1"]["name"], "Thorong La");
}

#[test]
fn test_array_collisions_keep_last() {
    let stored = json!([
        {"id": "dup", "question": "first"},
        {"id": "dup", "question": "second"},
    ]);

    let normalized = normalize_keyed_map(&stored, &JsonMap::new(), "faqs");

    assert_eq!(normalized.len(), 1);
    assert_eq!(normalized["dup"]["question"], "second");
}

#[test]
fn test_invalid_json_text_yields_fallback() {
    let fallback = map(json!({"keep": true}));
    assert_eq!(
        normalize_keyed_map(&json!("not json"), &fallback, "itinerary"),
        fallback
    );
}

#[test]
fn test_json_text_is_parsed() {
    assert_eq!(
        normalize_keyed_map(&json!(r#"{"a":1}"#), &JsonMap::new(), "itinerary"),
        map(json!({"a": 1}))
    );
}

#[test]
fn test_json_array_text_is_keyed() {
    let stored = json!(r#"[{"question": "Permits?"}, {"id": "f2", "question": "Guides?"}]"#);
    let normalized = normalize_keyed_map(&stored, &JsonMap::new(), "faqs");

    assert!(normalized.contains_key("item_0"));
    assert!(normalized.contains_key("f2"));
}

// =============================================================================
// Slugs
// =============================================================================

#[test]
fn test_slug_examples() {
    assert_eq!(slugify("Everest Base Camp!"), "everest-base-camp");
    assert_eq!(slugify("Annapurna Circuit"), "annapurna-circuit");
}

#[test]
fn test_slug_is_deterministic_and_idempotent() {
    let names = [
        "Gokyo Lakes & Cho La Pass",
        "  Manaslu   Circuit ",
        "Rara Lake -- Far West",
        "100% Pure Himalaya",
        "---",
    ];

    for name in names {
        let slug = slugify(name);
        assert_eq!(slugify(name), slug);
        assert_eq!(slugify(&slug), slug);
        assert!(!slug.starts_with('-') && !slug.ends_with('-'));
        assert!(!slug.contains("--"));
    }
}
