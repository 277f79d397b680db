//! Resort gallery database entity.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::GalleryItem;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "resort_gallery")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub image_url: String,
    pub title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub display_order: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for GalleryItem {
    fn from(model: Model) -> Self {
        GalleryItem {
            id: model.id,
            image_url: model.image_url,
            title: model.title,
            description: model.description,
            display_order: model.display_order,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<GalleryItem> for ActiveModel {
    fn from(item: GalleryItem) -> Self {
        ActiveModel {
            id: Set(item.id),
            image_url: Set(item.image_url),
            title: Set(item.title),
            description: Set(item.description),
            display_order: Set(item.display_order),
            created_at: Set(item.created_at),
            updated_at: Set(item.updated_at),
        }
    }
}
