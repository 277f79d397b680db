//! SeaORM entities, one module per table.
//!
//! Models convert into domain records with `From<Model>`, and domain records
//! convert into fully-set `ActiveModel`s for inserts and updates.

pub mod category;
pub mod destination;
pub mod enquiry;
pub mod experience;
pub mod gallery_item;
pub mod journey;
pub mod journey_day;
pub mod package;
pub mod resort_activity;
pub mod resort_package;

use sea_orm::entity::prelude::Json;

use domain::lists::split_comma_list;

/// Read a stored list column. Older rows may hold a comma-separated string.
pub(crate) fn string_list(value: Json) -> Vec<String> {
    match value {
        Json::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Json::String(text) => Some(text),
                _ => None,
            })
            .collect(),
        Json::String(text) => split_comma_list(&text),
        _ => Vec::new(),
    }
}

pub(crate) fn json_list(items: Vec<String>) -> Json {
    Json::from(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_list_from_array() {
        assert_eq!(string_list(json!(["Lakes", 3, "Peaks"])), vec!["Lakes", "Peaks"]);
    }

    #[test]
    fn test_string_list_from_legacy_text() {
        assert_eq!(string_list(json!("Lakes, Peaks")), vec!["Lakes", "Peaks"]);
        assert!(string_list(json!(null)).is_empty());
    }
}
