//! Journey day database entity.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::JourneyDay;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "journey_days")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub journey_id: Uuid,
    pub day_number: i32,
    pub title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::journey::Entity",
        from = "Column::JourneyId",
        to = "super::journey::Column::Id",
        on_delete = "Cascade"
    )]
    Journey,
}

impl Related<super::journey::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Journey.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for JourneyDay {
    fn from(model: Model) -> Self {
        JourneyDay {
            id: model.id,
            journey_id: model.journey_id,
            day_number: model.day_number,
            title: model.title,
            description: model.description,
            image_url: model.image_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<JourneyDay> for ActiveModel {
    fn from(day: JourneyDay) -> Self {
        ActiveModel {
            id: Set(day.id),
            journey_id: Set(day.journey_id),
            day_number: Set(day.day_number),
            title: Set(day.title),
            description: Set(day.description),
            image_url: Set(day.image_url),
            created_at: Set(day.created_at),
            updated_at: Set(day.updated_at),
        }
    }
}
