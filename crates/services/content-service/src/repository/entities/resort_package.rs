//! Resort package database entity.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::lists::split_line_list;
use domain::ResortPackage;

use super::json_list;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "resort_packages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub duration: String,
    pub price: String,
    pub original_price: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub includes: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub features: Json,
    pub badge: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Package lists are line-delimited when stored as text.
fn line_list(value: Json) -> Vec<String> {
    match value {
        Json::String(text) => split_line_list(&text),
        other => super::string_list(other),
    }
}

impl From<Model> for ResortPackage {
    fn from(model: Model) -> Self {
        ResortPackage {
            id: model.id,
            name: model.name,
            duration: model.duration,
            price: model.price,
            original_price: model.original_price,
            description: model.description,
            includes: line_list(model.includes),
            features: line_list(model.features),
            badge: model.badge,
            image_url: model.image_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<ResortPackage> for ActiveModel {
    fn from(p: ResortPackage) -> Self {
        ActiveModel {
            id: Set(p.id),
            name: Set(p.name),
            duration: Set(p.duration),
            price: Set(p.price),
            original_price: Set(p.original_price),
            description: Set(p.description),
            includes: Set(json_list(p.includes)),
            features: Set(json_list(p.features)),
            badge: Set(p.badge),
            image_url: Set(p.image_url),
            created_at: Set(p.created_at),
            updated_at: Set(p.updated_at),
        }
    }
}
