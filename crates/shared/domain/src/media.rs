//! Image naming rules for object storage.

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{
    DATA_URL_PREFIX, ITEM_ID_ALPHABET, PLACEHOLDER_IMAGE, STORAGE_KEY_RANDOM_LENGTH,
};

static UNSAFE_FILE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9.-]").expect("valid regex"));

/// Replace every character outside `[A-Za-z0-9.-]` with `_`.
pub fn sanitize_file_name(name: &str) -> String {
    UNSAFE_FILE_CHARS.replace_all(name, "_").into_owned()
}

/// Object key for a new upload: `{unix_millis}-{random}-{sanitized name}`.
pub fn storage_key(file_name: &str) -> String {
    let random = nanoid::nanoid!(STORAGE_KEY_RANDOM_LENGTH, &ITEM_ID_ALPHABET);
    storage_key_with(Utc::now().timestamp_millis(), &random, file_name)
}

fn storage_key_with(millis: i64, random: &str, file_name: &str) -> String {
    format!("{}-{}-{}", millis, random, sanitize_file_name(file_name))
}

/// Object key of a stored image, or `None` when the URL does not point at storage.
///
/// Inline data URLs and placeholder images are never stored remotely.
/// The key is the last path segment, without query string or fragment.
pub fn stored_key_from_url(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() || url.starts_with(DATA_URL_PREFIX) || url.contains(PLACEHOLDER_IMAGE) {
        return None;
    }

    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

/// Whether a MIME type names an image.
pub fn is_image_content_type(content_type: &str) -> bool {
    content_type.trim().to_ascii_lowercase().starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("Poon Hill (sunrise).jpg"), "Poon_Hill__sunrise_.jpg");
        assert_eq!(sanitize_file_name("river-view.v2.png"), "river-view.v2.png");
    }

    #[test]
    fn test_storage_key_layout() {
        assert_eq!(
            storage_key_with(1700000000000, "abc123", "my photo.jpg"),
            "1700000000000-abc123-my_photo.jpg"
        );

        let key = storage_key("my photo.jpg");
        let parts: Vec<&str> = key.splitn(3, '-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1].len(), STORAGE_KEY_RANDOM_LENGTH);
        assert_eq!(parts[2], "my_photo.jpg");
    }

    #[test]
    fn test_stored_key_from_url() {
        assert_eq!(
            stored_key_from_url("https://cdn.example.com/1700-abc123-lake.jpg"),
            Some("1700-abc123-lake.jpg".to_string())
        );
        assert_eq!(
            stored_key_from_url("https://cdn.example.com/a/b/lake.jpg?v=2"),
            Some("lake.jpg".to_string())
        );
    }

    #[test]
    fn test_stored_key_skips_inline_and_placeholder() {
        assert_eq!(stored_key_from_url("data:image/png;base64,iVBORw0KGgo="), None);
        assert_eq!(stored_key_from_url("/placeholder.svg"), None);
        assert_eq!(stored_key_from_url(""), None);
        assert_eq!(stored_key_from_url("https://cdn.example.com/"), None);
    }

    #[test]
    fn test_is_image_content_type() {
        assert!(is_image_content_type("image/jpeg"));
        assert!(is_image_content_type("IMAGE/PNG"));
        assert!(!is_image_content_type("application/pdf"));
    }
}
