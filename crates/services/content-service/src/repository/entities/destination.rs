//! Destination database entity.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::nested::normalize_optional;
use domain::{
    best_time_details_default, how_to_reach_default, where_to_stay_default, Destination, JsonMap,
};

use super::{json_list, string_list};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "destinations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub highlights: Json,
    pub duration: String,
    pub difficulty: String,
    pub best_time: String,
    pub altitude: Option<String>,
    pub featured: bool,
    pub category: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub overview: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub overview_image_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub places_image_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub activities_image_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub itinerary_image_url: Option<String>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub places_to_visit: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub things_to_do: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub how_to_reach: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub best_time_details: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub where_to_stay: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub itinerary: Option<Json>,
    #[sea_orm(column_type = "JsonBinary")]
    pub travel_tips: Json,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub faqs: Option<Json>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity, normalizing nested collections
impl From<Model> for Destination {
    fn from(model: Model) -> Self {
        let empty = JsonMap::new();
        Destination {
            id: model.id,
            name: model.name,
            slug: model.slug,
            description: model.description,
            highlights: string_list(model.highlights),
            duration: model.duration,
            difficulty: model.difficulty,
            best_time: model.best_time,
            altitude: model.altitude,
            featured: model.featured,
            category: model.category,
            image_url: model.image_url,
            overview: model.overview,
            overview_image_url: model.overview_image_url,
            places_image_url: model.places_image_url,
            activities_image_url: model.activities_image_url,
            itinerary_image_url: model.itinerary_image_url,
            places_to_visit: normalize_optional(
                model.places_to_visit.as_ref(),
                &empty,
                "places_to_visit",
            ),
            things_to_do: normalize_optional(model.things_to_do.as_ref(), &empty, "things_to_do"),
            how_to_reach: normalize_optional(
                model.how_to_reach.as_ref(),
                &how_to_reach_default(),
                "how_to_reach",
            ),
            best_time_details: normalize_optional(
                model.best_time_details.as_ref(),
                &best_time_details_default(),
                "best_time_details",
            ),
            where_to_stay: normalize_optional(
                model.where_to_stay.as_ref(),
                &where_to_stay_default(),
                "where_to_stay",
            ),
            itinerary: normalize_optional(model.itinerary.as_ref(), &empty, "itinerary"),
            travel_tips: string_list(model.travel_tips),
            faqs: normalize_optional(model.faqs.as_ref(), &empty, "faqs"),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<Destination> for ActiveModel {
    fn from(d: Destination) -> Self {
        ActiveModel {
            id: Set(d.id),
            name: Set(d.name),
            slug: Set(d.slug),
            description: Set(d.description),
            highlights: Set(json_list(d.highlights)),
            duration: Set(d.duration),
            difficulty: Set(d.difficulty),
            best_time: Set(d.best_time),
            altitude: Set(d.altitude),
            featured: Set(d.featured),
            category: Set(d.category),
            image_url: Set(d.image_url),
            overview: Set(d.overview),
            overview_image_url: Set(d.overview_image_url),
            places_image_url: Set(d.places_image_url),
            activities_image_url: Set(d.activities_image_url),
            itinerary_image_url: Set(d.itinerary_image_url),
            places_to_visit: Set(Some(Json::Object(d.places_to_visit))),
            things_to_do: Set(Some(Json::Object(d.things_to_do))),
            how_to_reach: Set(Some(Json::Object(d.how_to_reach))),
            best_time_details: Set(Some(Json::Object(d.best_time_details))),
            where_to_stay: Set(Some(Json::Object(d.where_to_stay))),
            itinerary: Set(Some(Json::Object(d.itinerary))),
            travel_tips: Set(json_list(d.travel_tips)),
            faqs: Set(Some(Json::Object(d.faqs))),
            created_at: Set(d.created_at),
            updated_at: Set(d.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn model() -> Model {
        Model {
            id: Uuid::new_v4(),
            name: "Manang".into(),
            slug: Some("manang".into()),
            description: "High valley".into(),
            highlights: json!(["Gangapurna Lake"]),
            duration: "3 days".into(),
            difficulty: "Moderate".into(),
            best_time: "Autumn".into(),
            altitude: None,
            featured: false,
            category: "Trekking".into(),
            image_url: None,
            overview: None,
            overview_image_url: None,
            places_image_url: None,
            activities_image_url: None,
            itinerary_image_url: None,
            places_to_visit: Some(json!("[{\"id\":\"p1\",\"name\":\"Braga\"}]")),
            things_to_do: Some(json!("undefined")),
            how_to_reach: None,
            best_time_details: None,
            where_to_stay: Some(json!({"budget": {"category": "Budget"}})),
            itinerary: Some(json!([{"day": 1}])),
            travel_tips: json!("Acclimatize"),
            faqs: Some(json!(5)),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_model_nested_fields_are_normalized() {
        let destination = Destination::from(model());

        assert_eq!(destination.places_to_visit["p1"]["name"], "Braga");
        assert!(destination.things_to_do.is_empty());
        assert_eq!(destination.how_to_reach, how_to_reach_default());
        assert_eq!(destination.best_time_details, best_time_details_default());
        assert!(destination.where_to_stay.contains_key("budget"));
        assert!(destination.itinerary.contains_key("item_0"));
        assert!(destination.faqs.is_empty());
        assert_eq!(destination.travel_tips, vec!["Acclimatize"]);
    }
}
