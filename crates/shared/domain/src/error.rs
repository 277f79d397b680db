//! Errors raised while building or changing content entities.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Input broke a content rule. The message is safe to show to visitors.
    #[error("{0}")]
    Validation(String),

    /// A normalized item could not be written back as JSON
    #[error("Failed to encode content item: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let err = DomainError::validation("Title is required");
        assert_eq!(err.to_string(), "Title is required");
    }

    #[test]
    fn test_encoding_wraps_serde_error() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = DomainError::from(source);
        assert!(matches!(err, DomainError::Encoding(_)));
        assert!(err.to_string().starts_with("Failed to encode content item"));
    }
}
