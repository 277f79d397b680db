//! Experience entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::DomainResult;
use crate::lists::ListInput;
use crate::validation::{non_blank, require_fields};

/// Experience domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub group_size: String,
    /// Display price, e.g. "₹3,500 per person"
    pub price: String,
    pub highlights: Vec<String>,
    pub featured: bool,
    pub category: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Experience create/update payload
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ExperienceInput {
    #[validate(length(min = 1, message = "Title is required"))]
    #[cfg_attr(feature = "openapi", schema(example = "Sunrise at Poon Hill"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Duration is required"))]
    pub duration: String,
    #[validate(length(min = 1, message = "Group size is required"))]
    #[cfg_attr(feature = "openapi", schema(example = "2-8 people"))]
    pub group_size: String,
    #[validate(length(min = 1, message = "Price is required"))]
    pub price: String,
    /// Array or comma separated text
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<String>))]
    pub highlights: ListInput,
    #[serde(default)]
    pub featured: bool,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Experience {
    /// Build a new experience from a validated payload.
    pub fn create(input: ExperienceInput) -> DomainResult<Self> {
        let now = Utc::now();
        Self::build(Uuid::new_v4(), now, input)
    }

    /// Replace all editable fields with the payload.
    pub fn apply(&mut self, input: ExperienceInput) -> DomainResult<()> {
        *self = Self::build(self.id, self.created_at, input)?;
        Ok(())
    }

    fn build(id: Uuid, created_at: DateTime<Utc>, input: ExperienceInput) -> DomainResult<Self> {
        require_fields(&[
            ("title", &input.title),
            ("description", &input.description),
            ("duration", &input.duration),
            ("group_size", &input.group_size),
            ("price", &input.price),
            ("category", &input.category),
        ])?;

        Ok(Self {
            id,
            title: input.title.trim().to_string(),
            description: input.description.trim().to_string(),
            duration: input.duration.trim().to_string(),
            group_size: input.group_size.trim().to_string(),
            price: input.price.trim().to_string(),
            highlights: input.highlights.comma_separated(),
            featured: input.featured,
            category: input.category.trim().to_string(),
            image_url: non_blank(input.image_url),
            created_at,
            updated_at: Utc::now(),
        })
    }
}
