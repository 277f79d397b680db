//! Resort content: activities, stay packages and the photo gallery.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::DEFAULT_ACTIVITY_ICON;
use crate::error::DomainResult;
use crate::lists::ListInput;
use crate::validation::{non_blank, require_fields};

// =============================================================================
// Activities
// =============================================================================

/// Activity offered at the resort
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ResortActivity {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub full_description: String,
    /// Icon name rendered by the site, e.g. "Mountain" or "Tent"
    pub icon: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ResortActivityInput {
    #[validate(length(min = 1, message = "Title is required"))]
    #[cfg_attr(feature = "openapi", schema(example = "Guided Forest Walk"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Full description is required"))]
    pub full_description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ResortActivity {
    pub fn create(input: ResortActivityInput) -> DomainResult<Self> {
        Self::build(Uuid::new_v4(), Utc::now(), input)
    }

    pub fn apply(&mut self, input: ResortActivityInput) -> DomainResult<()> {
        *self = Self::build(self.id, self.created_at, input)?;
        Ok(())
    }

    fn build(
        id: Uuid,
        created_at: DateTime<Utc>,
        input: ResortActivityInput,
    ) -> DomainResult<Self> {
        require_fields(&[
            ("title", &input.title),
            ("description", &input.description),
            ("full_description", &input.full_description),
        ])?;

        Ok(Self {
            id,
            title: input.title.trim().to_string(),
            description: input.description.trim().to_string(),
            full_description: input.full_description.trim().to_string(),
            icon: non_blank(input.icon).unwrap_or_else(|| DEFAULT_ACTIVITY_ICON.to_string()),
            image_url: non_blank(input.image_url),
            created_at,
            updated_at: Utc::now(),
        })
    }
}

// =============================================================================
// Stay packages
// =============================================================================

/// Bookable stay package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ResortPackage {
    pub id: Uuid,
    pub name: String,
    pub duration: String,
    pub price: String,
    pub original_price: String,
    pub description: String,
    pub includes: Vec<String>,
    pub features: Vec<String>,
    /// Ribbon text, e.g. "Popular"
    pub badge: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ResortPackageInput {
    #[validate(length(min = 1, message = "Name is required"))]
    #[cfg_attr(feature = "openapi", schema(example = "Weekend Escape"))]
    pub name: String,
    #[validate(length(min = 1, message = "Duration is required"))]
    #[cfg_attr(feature = "openapi", schema(example = "2 Days / 1 Night"))]
    pub duration: String,
    #[validate(length(min = 1, message = "Price is required"))]
    pub price: String,
    #[validate(length(min = 1, message = "Original price is required"))]
    pub original_price: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Array or one item per line
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<String>))]
    pub includes: ListInput,
    /// Array or one item per line
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<String>))]
    pub features: ListInput,
    #[validate(length(min = 1, message = "Badge is required"))]
    pub badge: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ResortPackage {
    pub fn create(input: ResortPackageInput) -> DomainResult<Self> {
        Self::build(Uuid::new_v4(), Utc::now(), input)
    }

    pub fn apply(&mut self, input: ResortPackageInput) -> DomainResult<()> {
        *self = Self::build(self.id, self.created_at, input)?;
        Ok(())
    }

    fn build(id: Uuid, created_at: DateTime<Utc>, input: ResortPackageInput) -> DomainResult<Self> {
        require_fields(&[
            ("name", &input.name),
            ("duration", &input.duration),
            ("price", &input.price),
            ("original_price", &input.original_price),
            ("description", &input.description),
            ("badge", &input.badge),
        ])?;

        Ok(Self {
            id,
            name: input.name.trim().to_string(),
            duration: input.duration.trim().to_string(),
            price: input.price.trim().to_string(),
            original_price: input.original_price.trim().to_string(),
            description: input.description.trim().to_string(),
            includes: input.includes.line_separated(),
            features: input.features.line_separated(),
            badge: input.badge.trim().to_string(),
            image_url: non_blank(input.image_url),
            created_at,
            updated_at: Utc::now(),
        })
    }
}

// =============================================================================
// Gallery
// =============================================================================

/// Resort gallery photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GalleryItem {
    pub id: Uuid,
    pub image_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Ascending sort key
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GalleryItemInput {
    #[validate(length(min = 1, message = "Image is required"))]
    pub image_url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

impl GalleryItem {
    pub fn create(input: GalleryItemInput) -> DomainResult<Self> {
        Self::build(Uuid::new_v4(), Utc::now(), input)
    }

    pub fn apply(&mut self, input: GalleryItemInput) -> DomainResult<()> {
        *self = Self::build(self.id, self.created_at, input)?;
        Ok(())
    }

    fn build(id: Uuid, created_at: DateTime<Utc>, input: GalleryItemInput) -> DomainResult<Self> {
        require_fields(&[("image_url", &input.image_url)])?;

        Ok(Self {
            id,
            image_url: input.image_url.trim().to_string(),
            title: non_blank(input.title),
            description: non_blank(input.description),
            display_order: input.display_order,
            created_at,
            updated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_defaults_icon() {
        let activity = ResortActivity::create(ResortActivityInput {
            title: "Guided Forest Walk".into(),
            description: "Two hours through the rhododendron forest".into(),
            full_description: "Starts at the lodge at 7am.".into(),
            icon: Some(" ".into()),
            image_url: None,
        })
        .unwrap();

        assert_eq!(activity.icon, DEFAULT_ACTIVITY_ICON);
    }

    #[test]
    fn test_package_splits_lines() {
        let package = ResortPackage::create(ResortPackageInput {
            name: "Weekend Escape".into(),
            duration: "2 Days / 1 Night".into(),
            price: "₹8,999".into(),
            original_price: "₹12,999".into(),
            description: "Two quiet days by the river".into(),
            includes: ListInput::from("Accommodation\nAll meals\n"),
            features: ListInput::from(vec!["Spa access".to_string(), " ".to_string()]),
            badge: "Popular".into(),
            image_url: None,
        })
        .unwrap();

        assert_eq!(package.includes, vec!["Accommodation", "All meals"]);
        assert_eq!(package.features, vec!["Spa access"]);
    }

    #[test]
    fn test_package_requires_badge() {
        let result = ResortPackage::create(ResortPackageInput {
            name: "Weekend Escape".into(),
            duration: "2 Days / 1 Night".into(),
            price: "₹8,999".into(),
            original_price: "₹12,999".into(),
            description: "Two quiet days by the river".into(),
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_gallery_item_requires_image() {
        assert!(GalleryItem::create(GalleryItemInput::default()).is_err());

        let item = GalleryItem::create(GalleryItemInput {
            image_url: "https://cdn.example.com/river.jpg".into(),
            title: Some("".into()),
            display_order: 3,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(item.title, None);
        assert_eq!(item.display_order, 3);
    }
}
