//! Nested collections stored as JSON maps keyed by generated item ids.
//!
//! Stored values have been written by several generations of clients, so a
//! field that should hold `{ "<id>": { ... } }` may also hold a JSON-encoded
//! string, a plain array or nothing at all. [`normalize_keyed_map`] turns any
//! of those into the keyed shape.

use chrono::Utc;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::constants::{ITEM_ID_ALPHABET, ITEM_ID_RANDOM_LENGTH, SYNTHETIC_KEY_PREFIX};

/// JSON object keyed by item id.
pub type JsonMap = Map<String, Value>;

/// Normalize a stored nested field into a map keyed by item id.
///
/// * null, blank text and the literals `""`, `''`, `null`, `undefined` yield `fallback`
/// * an object is returned unchanged
/// * an array is keyed by each element's `id`, or `item_<index>` when it has none;
///   a later element replaces an earlier one with the same key
/// * text is parsed as JSON and the parsed value handled as above;
///   unparseable text yields `fallback`
/// * any other scalar yields `fallback`
///
/// `field` is only used in diagnostics.
pub fn normalize_keyed_map(raw: &Value, fallback: &JsonMap, field: &str) -> JsonMap {
    match raw {
        Value::Null => fallback.clone(),
        Value::Object(map) => map.clone(),
        Value::Array(items) => key_items(items),
        Value::String(text) => normalize_text(text, fallback, field),
        other => {
            debug!(field, value = %other, "Unexpected scalar in nested field, using fallback");
            fallback.clone()
        }
    }
}

/// Same as [`normalize_keyed_map`] for a possibly missing value.
pub fn normalize_optional(raw: Option<&Value>, fallback: &JsonMap, field: &str) -> JsonMap {
    raw.map(|value| normalize_keyed_map(value, fallback, field))
        .unwrap_or_else(|| fallback.clone())
}

fn normalize_text(text: &str, fallback: &JsonMap, field: &str) -> JsonMap {
    let trimmed = text.trim();
    if is_empty_marker(trimmed) {
        return fallback.clone();
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => map,
        Ok(Value::Array(items)) => key_items(&items),
        // Double-encoded values unwrap one layer per pass
        Ok(Value::String(inner)) => normalize_text(&inner, fallback, field),
        Ok(_) => fallback.clone(),
        Err(err) => {
            warn!(field, error = %err, "Stored nested field is not valid JSON, using fallback");
            fallback.clone()
        }
    }
}

fn is_empty_marker(text: &str) -> bool {
    matches!(text, "" | "\"\"" | "''" | "null" | "undefined")
}

fn key_items(items: &[Value]) -> JsonMap {
    let mut map = JsonMap::new();
    for (index, item) in items.iter().enumerate() {
        map.insert(item_key(item, index), item.clone());
    }
    map
}

fn item_key(item: &Value, index: usize) -> String {
    match item.get("id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => format!("{}{}", SYNTHETIC_KEY_PREFIX, index),
    }
}

/// Generate an id for a new nested item.
///
/// Millisecond timestamp followed by random base-36 characters.
pub fn generate_item_id() -> String {
    format!(
        "{}{}",
        Utc::now().timestamp_millis(),
        nanoid::nanoid!(ITEM_ID_RANDOM_LENGTH, &ITEM_ID_ALPHABET)
    )
}

/// Insert items under freshly generated ids, stamping each object's `id` field.
///
/// Returns the generated ids in insertion order.
pub fn append_items(map: &mut JsonMap, items: Vec<Value>) -> Vec<String> {
    let mut ids = Vec::with_capacity(items.len());
    for mut item in items {
        let id = generate_item_id();
        if let Value::Object(fields) = &mut item {
            fields.insert("id".to_string(), Value::String(id.clone()));
        }
        map.insert(id.clone(), item);
        ids.push(id);
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fallback() -> JsonMap {
        json!({"air": {"title": "By Air", "details": []}})
            .as_object()
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_null_and_markers_yield_fallback() {
        for raw in [
            Value::Null,
            json!(""),
            json!("   "),
            json!("\"\""),
            json!("''"),
            json!("null"),
            json!("undefined"),
        ] {
            assert_eq!(normalize_keyed_map(&raw, &fallback(), "how_to_reach"), fallback());
        }
    }

    #[test]
    fn test_parsed_null_yields_fallback() {
        assert_eq!(normalize_keyed_map(&json!(" null "), &fallback(), "faqs"), fallback());
        assert_eq!(normalize_keyed_map(&json!("42"), &fallback(), "faqs"), fallback());
    }

    #[test]
    fn test_scalars_yield_fallback() {
        assert_eq!(normalize_keyed_map(&json!(true), &fallback(), "faqs"), fallback());
        assert_eq!(normalize_keyed_map(&json!(7), &fallback(), "faqs"), fallback());
    }

    #[test]
    fn test_numeric_ids_become_keys() {
        let raw = json!([{"id": 3, "question": "Permits?"}]);
        let map = normalize_keyed_map(&raw, &JsonMap::new(), "faqs");
        assert!(map.contains_key("3"));
    }

    #[test]
    fn test_empty_string_id_gets_synthetic_key() {
        let raw = json!([{"id": "", "question": "Permits?"}]);
        let map = normalize_keyed_map(&raw, &JsonMap::new(), "faqs");
        assert!(map.contains_key("item_0"));
    }

    #[test]
    fn test_double_encoded_string() {
        let inner = r#"{"a":1}"#;
        let raw = Value::String(serde_json::to_string(inner).unwrap());
        let map = normalize_keyed_map(&raw, &JsonMap::new(), "places_to_visit");
        assert_eq!(Value::Object(map), json!({"a": 1}));
    }

    #[test]
    fn test_normalize_optional_missing() {
        assert_eq!(normalize_optional(None, &fallback(), "how_to_reach"), fallback());
    }

    #[test]
    fn test_generate_item_id_shape() {
        let id = generate_item_id();
        let (timestamp, random) = id.split_at(id.len() - ITEM_ID_RANDOM_LENGTH);
        assert!(timestamp.parse::<i64>().is_ok());
        assert!(random.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert_ne!(generate_item_id(), generate_item_id());
    }

    #[test]
    fn test_append_items_stamps_ids() {
        let mut map = JsonMap::new();
        let ids = append_items(
            &mut map,
            vec![json!({"question": "Q1"}), json!({"question": "Q2"})],
        );

        assert_eq!(ids.len(), 2);
        assert_eq!(map.len(), 2);
        for id in ids {
            assert_eq!(map[&id]["id"], json!(id));
        }
    }
}
