//! URL slugs derived from display names.

use once_cell::sync::Lazy;
use regex::Regex;

static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").expect("valid regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static DASHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").expect("valid regex"));

/// Turn a display name into a URL slug.
///
/// Lowercases, drops everything except ASCII letters, digits, whitespace and
/// dashes, joins words with a single `-` and trims dashes at both ends.
/// The result is stable under re-application.
pub fn slugify(name: &str) -> String {
    let lower = name.to_lowercase();
    let kept = DISALLOWED.replace_all(&lower, "");
    let dashed = WHITESPACE.replace_all(kept.trim(), "-");
    let collapsed = DASHES.replace_all(&dashed, "-");
    collapsed.trim_matches('-').to_string()
}

/// Resolve the slug to persist for a record.
///
/// An explicit slug wins when it still has content after slugifying,
/// otherwise the slug is derived from the name. `None` when neither
/// produces anything usable.
pub fn resolve_slug(explicit: Option<&str>, name: &str) -> Option<String> {
    explicit
        .map(slugify)
        .filter(|s| !s.is_empty())
        .or_else(|| Some(slugify(name)).filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("Everest Base Camp!"), "everest-base-camp");
        assert_eq!(slugify("Annapurna Circuit"), "annapurna-circuit");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("  Langtang   --  Valley  "), "langtang-valley");
        assert_eq!(slugify("Upper Mustang - Lo Manthang"), "upper-mustang-lo-manthang");
    }

    #[test]
    fn test_slugify_is_idempotent() {
        for input in [
            "Everest Base Camp!",
            "-leading and trailing-",
            "Trek № 5",
            "",
            "!!!",
            "Tilicho Lake (4,919 m)",
        ] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_slugify_drops_symbols() {
        assert_eq!(slugify("Trek № 5"), "trek-5");
        assert_eq!(slugify("Tilicho Lake (4,919 m)"), "tilicho-lake-4919-m");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_resolve_slug_prefers_explicit() {
        assert_eq!(
            resolve_slug(Some("My Custom Slug"), "Annapurna Circuit"),
            Some("my-custom-slug".to_string())
        );
    }

    #[test]
    fn test_resolve_slug_falls_back_to_name() {
        assert_eq!(
            resolve_slug(None, "Annapurna Circuit"),
            Some("annapurna-circuit".to_string())
        );
        assert_eq!(
            resolve_slug(Some("   "), "Annapurna Circuit"),
            Some("annapurna-circuit".to_string())
        );
        assert_eq!(resolve_slug(Some("?"), "!!"), None);
    }
}
