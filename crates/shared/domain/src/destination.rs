//! Destination entity and its nested collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;
use validator::Validate;

use crate::error::{DomainError, DomainResult};
use crate::lists::ListInput;
use crate::nested::{append_items, normalize_keyed_map, JsonMap};
use crate::slug::resolve_slug;
use crate::validation::{non_blank, require_fields};

/// Destination domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Destination {
    pub id: Uuid,
    pub name: String,
    /// URL slug, unique across destinations
    pub slug: Option<String>,
    pub description: String,
    pub highlights: Vec<String>,
    pub duration: String,
    pub difficulty: String,
    pub best_time: String,
    pub altitude: Option<String>,
    pub featured: bool,
    pub category: String,
    pub image_url: Option<String>,
    pub overview: Option<String>,
    pub overview_image_url: Option<String>,
    pub places_image_url: Option<String>,
    pub activities_image_url: Option<String>,
    pub itinerary_image_url: Option<String>,
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub places_to_visit: JsonMap,
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub things_to_do: JsonMap,
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub how_to_reach: JsonMap,
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub best_time_details: JsonMap,
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub where_to_stay: JsonMap,
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub itinerary: JsonMap,
    pub travel_tips: Vec<String>,
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub faqs: JsonMap,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Destination create/update payload
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DestinationInput {
    #[validate(length(min = 1, message = "Name is required"))]
    #[cfg_attr(feature = "openapi", schema(example = "Annapurna Circuit"))]
    pub name: String,
    /// Derived from the name when omitted
    #[serde(default)]
    pub slug: Option<String>,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Array or comma separated text
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<String>))]
    pub highlights: ListInput,
    #[validate(length(min = 1, message = "Duration is required"))]
    #[cfg_attr(feature = "openapi", schema(example = "14-21 Days"))]
    pub duration: String,
    #[validate(length(min = 1, message = "Difficulty is required"))]
    #[cfg_attr(feature = "openapi", schema(example = "Challenging"))]
    pub difficulty: String,
    #[validate(length(min = 1, message = "Best time is required"))]
    pub best_time: String,
    #[serde(default)]
    pub altitude: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[validate(length(min = 1, message = "Category is required"))]
    #[cfg_attr(feature = "openapi", schema(example = "Trekking"))]
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub overview_image_url: Option<String>,
    #[serde(default)]
    pub places_image_url: Option<String>,
    #[serde(default)]
    pub activities_image_url: Option<String>,
    #[serde(default)]
    pub itinerary_image_url: Option<String>,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub places_to_visit: Value,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub things_to_do: Value,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub how_to_reach: Value,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub best_time_details: Value,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub where_to_stay: Value,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub itinerary: Value,
    /// Array or one tip per line
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<String>))]
    pub travel_tips: ListInput,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub faqs: Value,
}

impl DestinationInput {
    /// Check that every required field has content.
    pub fn check_required(&self) -> DomainResult<()> {
        require_fields(&[
            ("name", &self.name),
            ("description", &self.description),
            ("duration", &self.duration),
            ("difficulty", &self.difficulty),
            ("best_time", &self.best_time),
            ("category", &self.category),
        ])
    }
}

impl Destination {
    /// Build a new destination from a validated payload.
    pub fn create(input: DestinationInput) -> DomainResult<Self> {
        let now = Utc::now();
        Self::build(Uuid::new_v4(), now, now, input)
    }

    /// Replace all editable fields with the payload.
    pub fn apply(&mut self, input: DestinationInput) -> DomainResult<()> {
        *self = Self::build(self.id, self.created_at, Utc::now(), input)?;
        Ok(())
    }

    fn build(
        id: Uuid,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        input: DestinationInput,
    ) -> DomainResult<Self> {
        input.check_required()?;

        let slug = resolve_slug(input.slug.as_deref(), &input.name);

        Ok(Self {
            id,
            name: input.name.trim().to_string(),
            slug,
            description: input.description.trim().to_string(),
            highlights: input.highlights.comma_separated(),
            duration: input.duration.trim().to_string(),
            difficulty: input.difficulty.trim().to_string(),
            best_time: input.best_time.trim().to_string(),
            altitude: non_blank(input.altitude),
            featured: input.featured,
            category: input.category.trim().to_string(),
            image_url: non_blank(input.image_url),
            overview: non_blank(input.overview),
            overview_image_url: non_blank(input.overview_image_url),
            places_image_url: non_blank(input.places_image_url),
            activities_image_url: non_blank(input.activities_image_url),
            itinerary_image_url: non_blank(input.itinerary_image_url),
            places_to_visit: normalize_keyed_map(
                &input.places_to_visit,
                &JsonMap::new(),
                "places_to_visit",
            ),
            things_to_do: normalize_keyed_map(&input.things_to_do, &JsonMap::new(), "things_to_do"),
            how_to_reach: normalize_keyed_map(
                &input.how_to_reach,
                &how_to_reach_default(),
                "how_to_reach",
            ),
            best_time_details: normalize_keyed_map(
                &input.best_time_details,
                &best_time_details_default(),
                "best_time_details",
            ),
            where_to_stay: normalize_keyed_map(
                &input.where_to_stay,
                &where_to_stay_default(),
                "where_to_stay",
            ),
            itinerary: normalize_keyed_map(&input.itinerary, &JsonMap::new(), "itinerary"),
            travel_tips: input.travel_tips.line_separated(),
            faqs: normalize_keyed_map(&input.faqs, &JsonMap::new(), "faqs"),
            created_at,
            updated_at,
        })
    }

    /// Add items to one of the keyed collections under fresh ids.
    ///
    /// Each item is coerced into the collection's item shape first.
    pub fn append_to(
        &mut self,
        collection: NestedCollection,
        items: Vec<Value>,
    ) -> DomainResult<Vec<String>> {
        let items = items
            .into_iter()
            .map(|item| collection.coerce(item))
            .collect::<DomainResult<Vec<_>>>()?;

        let target = match collection {
            NestedCollection::PlacesToVisit => &mut self.places_to_visit,
            NestedCollection::ThingsToDo => &mut self.things_to_do,
            NestedCollection::Itinerary => &mut self.itinerary,
            NestedCollection::Faqs => &mut self.faqs,
        };
        let ids = append_items(target, items);
        self.updated_at = Utc::now();
        Ok(ids)
    }
}

// =============================================================================
// Nested collections
// =============================================================================

/// Keyed collections that hold generated items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum NestedCollection {
    PlacesToVisit,
    ThingsToDo,
    Itinerary,
    Faqs,
}

impl NestedCollection {
    /// Parse the item into this collection's shape and back into JSON.
    fn coerce(self, item: Value) -> DomainResult<Value> {
        fn reshape<T>(item: Value) -> DomainResult<Value>
        where
            T: serde::de::DeserializeOwned + Serialize,
        {
            let typed: T = serde_json::from_value(item)
                .map_err(|e| DomainError::validation(format!("Invalid item: {}", e)))?;
            Ok(serde_json::to_value(typed)?)
        }

        match self {
            NestedCollection::PlacesToVisit => reshape::<Place>(item),
            NestedCollection::ThingsToDo => reshape::<Activity>(item),
            NestedCollection::Itinerary => reshape::<ItineraryDay>(item),
            NestedCollection::Faqs => reshape::<Faq>(item),
        }
    }
}

/// Place to visit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub image_url: Option<String>,
}

/// Thing to do
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
}

/// Single itinerary day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct ItineraryDay {
    pub id: String,
    pub day: u32,
    pub title: String,
    pub activities: Vec<String>,
    pub image_url: Option<String>,
}

/// Frequently asked question
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
}

// =============================================================================
// Defaults for structured fields
// =============================================================================

fn object(value: Value) -> JsonMap {
    match value {
        Value::Object(map) => map,
        _ => JsonMap::new(),
    }
}

/// Travel modes with empty detail lists
pub fn how_to_reach_default() -> JsonMap {
    object(json!({
        "air": { "title": "By Air", "details": [] },
        "train": { "title": "By Train", "details": [] },
        "road": { "title": "By Road", "details": [] },
    }))
}

/// Seasons with every description left blank
pub fn best_time_details_default() -> JsonMap {
    let blank = json!({
        "season": "",
        "weather": "",
        "why_visit": "",
        "events": "",
        "challenges": "",
    });
    object(json!({
        "winter": blank.clone(),
        "summer": blank.clone(),
        "monsoon": blank,
    }))
}

/// Accommodation tiers without options
pub fn where_to_stay_default() -> JsonMap {
    object(json!({
        "budget": { "category": "Budget", "description": "", "options": [] },
        "midrange": { "category": "Mid-range", "description": "", "options": [] },
        "luxury": { "category": "Luxury", "description": "", "options": [] },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> DestinationInput {
        DestinationInput {
            name: name.to_string(),
            description: "Classic circuit around the Annapurna massif".to_string(),
            duration: "14-21 Days".to_string(),
            difficulty: "Challenging".to_string(),
            best_time: "March-May, September-November".to_string(),
            category: "Trekking".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_derives_slug_from_name() {
        let destination = Destination::create(input("Annapurna Circuit")).unwrap();
        assert_eq!(destination.slug.as_deref(), Some("annapurna-circuit"));
    }

    #[test]
    fn test_create_applies_structured_defaults() {
        let destination = Destination::create(input("Langtang Valley")).unwrap();

        assert_eq!(destination.how_to_reach, how_to_reach_default());
        assert_eq!(destination.best_time_details, best_time_details_default());
        assert_eq!(destination.where_to_stay, where_to_stay_default());
        assert!(destination.places_to_visit.is_empty());
        assert!(destination.faqs.is_empty());
    }

    #[test]
    fn test_create_cleans_lists_and_urls() {
        let mut payload = input("Langtang Valley");
        payload.highlights = ListInput::from("Kyanjin Gompa, Tserko Ri, ");
        payload.travel_tips = ListInput::from("Carry permits\n\nAcclimatize");
        payload.image_url = Some("   ".to_string());

        let destination = Destination::create(payload).unwrap();

        assert_eq!(destination.highlights, vec!["Kyanjin Gompa", "Tserko Ri"]);
        assert_eq!(destination.travel_tips, vec!["Carry permits", "Acclimatize"]);
        assert_eq!(destination.image_url, None);
    }

    #[test]
    fn test_create_keys_array_collections() {
        let mut payload = input("Langtang Valley");
        payload.faqs = json!([
            {"id": "f1", "question": "Permits?", "answer": "Yes"},
            {"question": "Guide?"}
        ]);

        let destination = Destination::create(payload).unwrap();

        assert!(destination.faqs.contains_key("f1"));
        assert!(destination.faqs.contains_key("item_1"));
    }

    #[test]
    fn test_create_rejects_blank_required_fields() {
        let mut payload = input("Langtang Valley");
        payload.category = " ".to_string();

        let err = Destination::create(payload).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.ends_with("category")));
    }

    #[test]
    fn test_apply_keeps_identity() {
        let mut destination = Destination::create(input("Annapurna Circuit")).unwrap();
        let id = destination.id;
        let created_at = destination.created_at;

        let mut payload = input("Annapurna Circuit Trek");
        payload.slug = Some("annapurna".to_string());
        destination.apply(payload).unwrap();

        assert_eq!(destination.id, id);
        assert_eq!(destination.created_at, created_at);
        assert_eq!(destination.slug.as_deref(), Some("annapurna"));
        assert_eq!(destination.name, "Annapurna Circuit Trek");
    }

    #[test]
    fn test_append_to_coerces_items() {
        let mut destination = Destination::create(input("Annapurna Circuit")).unwrap();

        let ids = destination
            .append_to(
                NestedCollection::PlacesToVisit,
                vec![json!({"name": "Manang", "description": "Acclimatization stop"})],
            )
            .unwrap();

        let place = &destination.places_to_visit[&ids[0]];
        assert_eq!(place["name"], "Manang");
        assert_eq!(place["highlights"], json!([]));
        assert_eq!(place["id"], json!(ids[0]));
    }

    #[test]
    fn test_append_to_rejects_wrong_shape() {
        let mut destination = Destination::create(input("Annapurna Circuit")).unwrap();

        let result =
            destination.append_to(NestedCollection::Itinerary, vec![json!({"day": "first"})]);
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
