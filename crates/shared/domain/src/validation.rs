//! Field-level checks shared by every content input.

use crate::constants::REQUIRED_FIELDS_MESSAGE;
use crate::error::{DomainError, DomainResult};

/// Fail when any of the named fields is blank after trimming.
///
/// The error message lists every missing field, in the given order.
pub fn require_fields(fields: &[(&str, &str)]) -> DomainResult<()> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DomainError::validation(format!(
            "{}: {}",
            REQUIRED_FIELDS_MESSAGE,
            missing.join(", ")
        )))
    }
}

/// Trim an optional text field, mapping blank values to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_fields_lists_missing() {
        let err = require_fields(&[("name", "Langtang"), ("duration", " "), ("category", "")])
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("Please fill in all required fields: duration, category")
        );
    }

    #[test]
    fn test_require_fields_ok() {
        assert!(require_fields(&[("name", "Langtang")]).is_ok());
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  ".into())), None);
        assert_eq!(non_blank(Some(" https://x/y.jpg ".into())), Some("https://x/y.jpg".into()));
        assert_eq!(non_blank(None), None);
    }
}
