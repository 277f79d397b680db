//! Visitor enquiries about journeys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::{is_valid_enquiry_status, ENQUIRY_STATUS_NEW};
use crate::error::{DomainError, DomainResult};
use crate::validation::{non_blank, require_fields};

/// Enquiry submitted from the public site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Enquiry {
    pub id: Uuid,
    /// Journey asked about, if any
    pub journey_id: Option<Uuid>,
    pub journey_title: String,
    pub name: String,
    pub email: String,
    pub message: Option<String>,
    pub status: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public enquiry submission
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EnquiryInput {
    #[serde(default)]
    pub journey_id: Option<Uuid>,
    #[validate(length(min = 1, message = "Journey title is required"))]
    #[cfg_attr(feature = "openapi", schema(example = "Everest Base Camp Trek"))]
    pub journey_title: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    #[cfg_attr(feature = "openapi", schema(example = "traveller@example.com"))]
    pub email: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Admin triage update
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EnquiryUpdate {
    #[serde(default)]
    pub is_read: Option<bool>,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "contacted"))]
    pub status: Option<String>,
}

impl Enquiry {
    pub fn create(input: EnquiryInput) -> DomainResult<Self> {
        require_fields(&[
            ("journey_title", &input.journey_title),
            ("name", &input.name),
            ("email", &input.email),
        ])?;
        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4(),
            journey_id: input.journey_id,
            journey_title: input.journey_title.trim().to_string(),
            name: input.name.trim().to_string(),
            email: input.email.trim().to_string(),
            message: non_blank(input.message),
            status: ENQUIRY_STATUS_NEW.to_string(),
            is_read: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply read flag and status changes.
    pub fn apply(&mut self, update: EnquiryUpdate) -> DomainResult<()> {
        if let Some(status) = update.status {
            if !is_valid_enquiry_status(&status) {
                return Err(DomainError::validation(format!("Unknown enquiry status: {}", status)));
            }
            self.status = status;
        }
        if let Some(is_read) = update.is_read {
            self.is_read = is_read;
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enquiry() -> Enquiry {
        Enquiry::create(EnquiryInput {
            journey_id: None,
            journey_title: "Everest Base Camp Trek".into(),
            name: "Asha".into(),
            email: "asha@example.com".into(),
            message: Some(" ".into()),
        })
        .unwrap()
    }

    #[test]
    fn test_create_starts_unread() {
        let enquiry = enquiry();
        assert_eq!(enquiry.status, ENQUIRY_STATUS_NEW);
        assert!(!enquiry.is_read);
        assert_eq!(enquiry.message, None);
    }

    #[test]
    fn test_apply_marks_read() {
        let mut enquiry = enquiry();
        enquiry
            .apply(EnquiryUpdate {
                is_read: Some(true),
                status: Some("contacted".into()),
            })
            .unwrap();
        assert!(enquiry.is_read);
        assert_eq!(enquiry.status, "contacted");
    }

    #[test]
    fn test_apply_rejects_unknown_status() {
        let mut enquiry = enquiry();
        let result = enquiry.apply(EnquiryUpdate {
            is_read: None,
            status: Some("archived".into()),
        });
        assert!(result.is_err());
        assert_eq!(enquiry.status, ENQUIRY_STATUS_NEW);
    }
}
