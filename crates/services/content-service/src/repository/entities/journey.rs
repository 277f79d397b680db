//! Journey database entity.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::Journey;

use super::{json_list, string_list};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "journeys")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub duration: String,
    pub difficulty: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub activities: Json,
    pub featured: bool,
    pub category: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::journey_day::Entity")]
    JourneyDay,
}

impl Related<super::journey_day::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JourneyDay.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Journey {
    fn from(model: Model) -> Self {
        Journey {
            id: model.id,
            title: model.title,
            description: model.description,
            duration: model.duration,
            difficulty: model.difficulty,
            activities: string_list(model.activities),
            featured: model.featured,
            category: model.category,
            image_url: model.image_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<Journey> for ActiveModel {
    fn from(j: Journey) -> Self {
        ActiveModel {
            id: Set(j.id),
            title: Set(j.title),
            description: Set(j.description),
            duration: Set(j.duration),
            difficulty: Set(j.difficulty),
            activities: Set(json_list(j.activities)),
            featured: Set(j.featured),
            category: Set(j.category),
            image_url: Set(j.image_url),
            created_at: Set(j.created_at),
            updated_at: Set(j.updated_at),
        }
    }
}
