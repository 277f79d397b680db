//! Package (blog post) database entity.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::Package;

use super::{json_list, string_list};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "packages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub excerpt: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub category: String,
    pub author: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub author_bio: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub author_avatar: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,
    pub featured: bool,
    pub read_time: String,
    pub published_date: Date,
    pub views: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Package {
    fn from(model: Model) -> Self {
        Package {
            id: model.id,
            title: model.title,
            excerpt: model.excerpt,
            content: model.content,
            category: model.category,
            author: model.author,
            author_bio: model.author_bio,
            author_avatar: model.author_avatar,
            image_url: model.image_url,
            tags: string_list(model.tags),
            featured: model.featured,
            read_time: model.read_time,
            published_date: model.published_date,
            views: model.views,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<Package> for ActiveModel {
    fn from(p: Package) -> Self {
        ActiveModel {
            id: Set(p.id),
            title: Set(p.title),
            excerpt: Set(p.excerpt),
            content: Set(p.content),
            category: Set(p.category),
            author: Set(p.author),
            author_bio: Set(p.author_bio),
            author_avatar: Set(p.author_avatar),
            image_url: Set(p.image_url),
            tags: Set(json_list(p.tags)),
            featured: Set(p.featured),
            read_time: Set(p.read_time),
            published_date: Set(p.published_date),
            views: Set(p.views),
            created_at: Set(p.created_at),
            updated_at: Set(p.updated_at),
        }
    }
}
