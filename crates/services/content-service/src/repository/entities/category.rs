//! Category database entity.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::Category;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Category {
    fn from(model: Model) -> Self {
        Category {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
        }
    }
}

impl From<Category> for ActiveModel {
    fn from(c: Category) -> Self {
        ActiveModel {
            id: Set(c.id),
            name: Set(c.name),
            created_at: Set(c.created_at),
        }
    }
}
