//! Resort activity database entity.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::ResortActivity;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "resort_activities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub full_description: String,
    pub icon: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ResortActivity {
    fn from(model: Model) -> Self {
        ResortActivity {
            id: model.id,
            title: model.title,
            description: model.description,
            full_description: model.full_description,
            icon: model.icon,
            image_url: model.image_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<ResortActivity> for ActiveModel {
    fn from(a: ResortActivity) -> Self {
        ActiveModel {
            id: Set(a.id),
            title: Set(a.title),
            description: Set(a.description),
            full_description: Set(a.full_description),
            icon: Set(a.icon),
            image_url: Set(a.image_url),
            created_at: Set(a.created_at),
            updated_at: Set(a.updated_at),
        }
    }
}
