//! List-valued form fields.
//!
//! Admin forms send lists either as a JSON array or as one delimited string
//! ("Trekking, Photography" or one item per line).

use serde::{Deserialize, Serialize};

/// A list field as it arrives from a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListInput {
    Items(Vec<String>),
    Text(String),
}

impl Default for ListInput {
    fn default() -> Self {
        ListInput::Items(Vec::new())
    }
}

impl ListInput {
    /// Items of a comma separated list.
    pub fn comma_separated(&self) -> Vec<String> {
        self.split_with(split_comma_list)
    }

    /// Items of a newline separated list.
    pub fn line_separated(&self) -> Vec<String> {
        self.split_with(split_line_list)
    }

    fn split_with(&self, split: fn(&str) -> Vec<String>) -> Vec<String> {
        match self {
            ListInput::Items(items) => clean(items.iter().map(String::as_str)),
            ListInput::Text(text) => split(text),
        }
    }
}

impl From<Vec<String>> for ListInput {
    fn from(items: Vec<String>) -> Self {
        ListInput::Items(items)
    }
}

impl From<&str> for ListInput {
    fn from(text: &str) -> Self {
        ListInput::Text(text.to_string())
    }
}

/// Split on commas, trim each item and drop empty ones.
pub fn split_comma_list(text: &str) -> Vec<String> {
    clean(text.split(','))
}

/// Split on line breaks, trim each item and drop empty ones.
pub fn split_line_list(text: &str) -> Vec<String> {
    clean(text.lines())
}

fn clean<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    items
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_comma_list() {
        assert_eq!(
            split_comma_list("Trekking, Photography ,, Cultural Visits, "),
            vec!["Trekking", "Photography", "Cultural Visits"]
        );
        assert!(split_comma_list("  ").is_empty());
    }

    #[test]
    fn test_split_line_list_handles_crlf() {
        assert_eq!(
            split_line_list("Accommodation\r\nAll meals\n\n  Welcome drink  \n"),
            vec!["Accommodation", "All meals", "Welcome drink"]
        );
    }

    #[test]
    fn test_list_input_accepts_array_or_string() {
        let from_array: ListInput = serde_json::from_str(r#"["a", " b ", ""]"#).unwrap();
        let from_text: ListInput = serde_json::from_str(r#""a, b""#).unwrap();

        assert_eq!(from_array.comma_separated(), vec!["a", "b"]);
        assert_eq!(from_text.comma_separated(), vec!["a", "b"]);
    }

    #[test]
    fn test_array_items_are_not_split_further() {
        let input = ListInput::from(vec!["Guide, porter".to_string()]);
        assert_eq!(input.comma_separated(), vec!["Guide, porter"]);
    }
}
