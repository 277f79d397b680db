//! Content categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::DomainResult;
use crate::validation::require_fields;

/// Category used to group journeys, destinations and experiences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CategoryInput {
    #[validate(length(min = 1, message = "Name is required"))]
    #[cfg_attr(feature = "openapi", schema(example = "Trekking"))]
    pub name: String,
}

impl Category {
    pub fn create(input: CategoryInput) -> DomainResult<Self> {
        require_fields(&[("name", &input.name)])?;
        Ok(Self::named(input.name.trim()))
    }

    /// Category with the given name, created now.
    pub fn named(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: Utc::now(),
        }
    }
}
