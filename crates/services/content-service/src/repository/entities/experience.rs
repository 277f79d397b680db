//! Experience database entity.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::Experience;

use super::{json_list, string_list};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub duration: String,
    pub group_size: String,
    pub price: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub highlights: Json,
    pub featured: bool,
    pub category: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Experience {
    fn from(model: Model) -> Self {
        Experience {
            id: model.id,
            title: model.title,
            description: model.description,
            duration: model.duration,
            group_size: model.group_size,
            price: model.price,
            highlights: string_list(model.highlights),
            featured: model.featured,
            category: model.category,
            image_url: model.image_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<Experience> for ActiveModel {
    fn from(e: Experience) -> Self {
        ActiveModel {
            id: Set(e.id),
            title: Set(e.title),
            description: Set(e.description),
            duration: Set(e.duration),
            group_size: Set(e.group_size),
            price: Set(e.price),
            highlights: Set(json_list(e.highlights)),
            featured: Set(e.featured),
            category: Set(e.category),
            image_url: Set(e.image_url),
            created_at: Set(e.created_at),
            updated_at: Set(e.updated_at),
        }
    }
}
