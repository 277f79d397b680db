//! Enquiry database entity.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::Enquiry;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "enquiries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub journey_id: Option<Uuid>,
    pub journey_title: String,
    pub name: String,
    pub email: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub message: Option<String>,
    pub status: String,
    pub is_read: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Enquiry {
    fn from(model: Model) -> Self {
        Enquiry {
            id: model.id,
            journey_id: model.journey_id,
            journey_title: model.journey_title,
            name: model.name,
            email: model.email,
            message: model.message,
            status: model.status,
            is_read: model.is_read,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<Enquiry> for ActiveModel {
    fn from(e: Enquiry) -> Self {
        ActiveModel {
            id: Set(e.id),
            journey_id: Set(e.journey_id),
            journey_title: Set(e.journey_title),
            name: Set(e.name),
            email: Set(e.email),
            message: Set(e.message),
            status: Set(e.status),
            is_read: Set(e.is_read),
            created_at: Set(e.created_at),
            updated_at: Set(e.updated_at),
        }
    }
}
