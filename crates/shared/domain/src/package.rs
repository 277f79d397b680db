//! Travel packages, which double as blog posts on the public site.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::DEFAULT_READ_TIME;
use crate::error::DomainResult;
use crate::lists::ListInput;
use crate::validation::{non_blank, require_fields};

/// Package domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Package {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub author: String,
    pub author_bio: Option<String>,
    pub author_avatar: Option<String>,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub featured: bool,
    pub read_time: String,
    pub published_date: NaiveDate,
    pub views: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Package create/update payload
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PackageInput {
    #[validate(length(min = 1, message = "Title is required"))]
    #[cfg_attr(feature = "openapi", schema(example = "Ten Days in the Khumbu"))]
    pub title: String,
    #[validate(length(min = 1, message = "Excerpt is required"))]
    pub excerpt: String,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    #[serde(default)]
    pub author_bio: Option<String>,
    #[serde(default)]
    pub author_avatar: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Array or comma separated text
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<String>))]
    pub tags: ListInput,
    #[serde(default)]
    pub featured: bool,
    /// Defaults to "5 min read"
    #[serde(default)]
    pub read_time: Option<String>,
    /// Defaults to today on create and to the current value on update
    #[serde(default)]
    pub published_date: Option<NaiveDate>,
}

impl Package {
    /// Build a new package from a validated payload.
    pub fn create(input: PackageInput) -> DomainResult<Self> {
        let now = Utc::now();
        let published_date = input.published_date.unwrap_or_else(|| now.date_naive());
        Self::build(Uuid::new_v4(), now, published_date, 0, input)
    }

    /// Replace all editable fields with the payload. View count is preserved.
    pub fn apply(&mut self, input: PackageInput) -> DomainResult<()> {
        let published_date = input.published_date.unwrap_or(self.published_date);
        *self = Self::build(self.id, self.created_at, published_date, self.views, input)?;
        Ok(())
    }

    fn build(
        id: Uuid,
        created_at: DateTime<Utc>,
        published_date: NaiveDate,
        views: i32,
        input: PackageInput,
    ) -> DomainResult<Self> {
        require_fields(&[
            ("title", &input.title),
            ("excerpt", &input.excerpt),
            ("content", &input.content),
            ("category", &input.category),
            ("author", &input.author),
        ])?;

        Ok(Self {
            id,
            title: input.title.trim().to_string(),
            excerpt: input.excerpt.trim().to_string(),
            content: input.content.trim().to_string(),
            category: input.category.trim().to_string(),
            author: input.author.trim().to_string(),
            author_bio: non_blank(input.author_bio),
            author_avatar: non_blank(input.author_avatar),
            image_url: non_blank(input.image_url),
            tags: input.tags.comma_separated(),
            featured: input.featured,
            read_time: non_blank(input.read_time).unwrap_or_else(|| DEFAULT_READ_TIME.to_string()),
            published_date,
            views,
            created_at,
            updated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> PackageInput {
        PackageInput {
            title: "Ten Days in the Khumbu".into(),
            excerpt: "Teahouses, yaks and thin air.".into(),
            content: "Day one starts with the flight to Lukla.".into(),
            category: "Adventure".into(),
            author: "Pemba Sherpa".into(),
            tags: ListInput::from("Everest, Teahouse, "),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_applies_defaults() {
        let package = Package::create(input()).unwrap();

        assert_eq!(package.read_time, DEFAULT_READ_TIME);
        assert_eq!(package.views, 0);
        assert_eq!(package.tags, vec!["Everest", "Teahouse"]);
        assert_eq!(package.published_date, package.created_at.date_naive());
    }

    #[test]
    fn test_apply_preserves_views_and_date() {
        let mut package = Package::create(input()).unwrap();
        package.views = 42;
        let published = package.published_date;

        let mut update = input();
        update.read_time = Some("8 min read".into());
        package.apply(update).unwrap();

        assert_eq!(package.views, 42);
        assert_eq!(package.published_date, published);
        assert_eq!(package.read_time, "8 min read");
    }

    #[test]
    fn test_create_requires_author() {
        let mut payload = input();
        payload.author = String::new();
        assert!(Package::create(payload).is_err());
    }
}
