//! AI-assisted form filling: prompts, reply parsing and fallback content.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;
use validator::Validate;

use crate::constants::{DEFAULT_CATEGORIES, GENERATION_FALLBACK_SUGGESTION};

/// Kind of form being pre-filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub enum ContentType {
    Journey,
    Experience,
    Package,
    BlogPost,
    DaySchedule,
    ResortActivity,
    ResortPackage,
    Destination,
    Place,
    Activity,
    Itinerary,
    Faq,
    TravelInfo,
    Season,
    Accommodation,
    TravelTips,
}

/// Generation request
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GenerationRequest {
    #[validate(length(min = 1, message = "Please enter a title first"))]
    #[cfg_attr(feature = "openapi", schema(example = "Annapurna Circuit"))]
    pub title: String,
    #[serde(alias = "contentType")]
    pub content_type: ContentType,
}

/// Generated field values plus hints for the editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GeneratedContent {
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub content: Value,
    pub suggestions: Vec<String>,
}

impl GeneratedContent {
    /// Parse a model reply, substituting fallback content when it holds no JSON.
    pub fn from_reply(content_type: ContentType, reply: &str) -> Self {
        match parse_reply(reply) {
            Some(content) => Self {
                content,
                suggestions: Vec::new(),
            },
            None => {
                warn!(?content_type, reply, "Could not parse generated content, using fallback");
                Self {
                    content: content_type.fallback(),
                    suggestions: vec![GENERATION_FALLBACK_SUGGESTION.to_string()],
                }
            }
        }
    }
}

impl ContentType {
    /// Prompt asking the model for this form's fields as JSON.
    pub fn prompt(self, title: &str) -> String {
        let categories = DEFAULT_CATEGORIES.join(", ");
        let (subject, instructions, shape) = match self {
            ContentType::Journey => (
                "a travel journey",
                format!(
                    "Write a 2-3 sentence description, a duration such as \"7 Days\", a difficulty \
                     such as \"Moderate\", a comma separated list of activities and a category \
                     chosen from: {categories}."
                ),
                r#"{"description": "", "duration": "", "difficulty": "", "activities": "a, b, c", "category": "", "image_prompt": ""}"#,
            ),
            ContentType::Experience => (
                "a travel experience",
                format!(
                    "Write a 2-3 sentence description, a duration such as \"Full Day\", a group size, \
                     a price per person, 3-5 comma separated highlights and a category chosen from: \
                     {categories}."
                ),
                r#"{"description": "", "duration": "", "group_size": "", "price": "", "highlights": "a, b, c", "category": "", "image_prompt": ""}"#,
            ),
            ContentType::Package | ContentType::BlogPost => (
                "a travel blog post",
                "Write a 1-2 sentence excerpt, 3-4 paragraphs of content, a category, an author \
                 name with a one sentence bio, 3-5 comma separated tags and a read time such as \
                 \"5 min read\"."
                    .to_string(),
                r#"{"excerpt": "", "content": "", "category": "", "author": "", "author_bio": "", "tags": "a, b, c", "read_time": "", "image_prompt": ""}"#,
            ),
            ContentType::DaySchedule => (
                "one day of a trekking itinerary",
                "Write a short title for the day and a 2-3 sentence description of the route, \
                 sights and overnight stop."
                    .to_string(),
                r#"{"title": "", "description": ""}"#,
            ),
            ContentType::ResortActivity => (
                "a resort activity",
                "Write a one sentence description, a 2-3 paragraph full description and an icon \
                 chosen from: Mountain, Tent, Trees, MapPin, Compass, Route, Camera, Coffee, \
                 Utensils, Bike, Binoculars, Sailboat, Sun, Star."
                    .to_string(),
                r#"{"description": "", "full_description": "", "icon": "", "image_prompt": ""}"#,
            ),
            ContentType::ResortPackage => (
                "a resort stay package",
                "Give a duration such as \"2 Days / 1 Night\", a price, a higher original price, a \
                 2-3 sentence description, 5-7 included items and 3-5 features (one per line) and \
                 a badge such as \"Popular\"."
                    .to_string(),
                r#"{"duration": "", "price": "", "original_price": "", "description": "", "includes": "a\nb\nc", "features": "a\nb\nc", "badge": "", "image_prompt": ""}"#,
            ),
            ContentType::Destination => (
                "a Himalayan travel destination",
                format!(
                    "Write a 2-3 sentence description, a duration, a difficulty, the best time to \
                     visit, the altitude range, a category chosen from: {categories}, 3-5 comma \
                     separated highlights and a 3-4 paragraph overview."
                ),
                r#"{"description": "", "duration": "", "difficulty": "", "best_time": "", "altitude": "", "category": "", "highlights": "a, b, c", "overview": ""}"#,
            ),
            ContentType::Place => (
                "a place to visit",
                "Write a 2-3 sentence description and three highlights.".to_string(),
                r#"{"description": "", "highlights": ["", "", ""]}"#,
            ),
            ContentType::Activity => (
                "a travel activity",
                "Give a numbered title such as \"1. Activity Name\" and a 2-3 sentence description."
                    .to_string(),
                r#"{"title": "1. ", "description": ""}"#,
            ),
            ContentType::Itinerary => (
                "a travel itinerary day",
                "Give the day number, a short title and 4-5 activities.".to_string(),
                r#"{"day": 1, "title": "", "activities": ["", "", "", ""]}"#,
            ),
            ContentType::Faq => (
                "a traveller's frequently asked question",
                "Give one question and a 2-3 sentence answer.".to_string(),
                r#"{"question": "", "answer": ""}"#,
            ),
            ContentType::TravelInfo => (
                "travel logistics",
                "List 3-4 practical details on getting there.".to_string(),
                r#"{"details": ["", "", ""]}"#,
            ),
            ContentType::Season => (
                "a travel season",
                "Name the season and describe the weather, why to visit, events and challenges."
                    .to_string(),
                r#"{"season": "", "weather": "", "why_visit": "", "events": "", "challenges": ""}"#,
            ),
            ContentType::Accommodation => (
                "an accommodation tier",
                "Write a 2-3 sentence description and 3-5 accommodation options.".to_string(),
                r#"{"description": "", "options": ["", "", ""]}"#,
            ),
            ContentType::TravelTips => (
                "travel tips",
                "List 5-8 practical tips.".to_string(),
                r#"{"tips": ["", "", "", "", ""]}"#,
            ),
        };

        format!(
            "Generate content for {subject} titled \"{title}\". {instructions}\n\n\
             Respond with JSON only, shaped as:\n{shape}"
        )
    }

    /// Content offered when the model reply cannot be used.
    pub fn fallback(self) -> Value {
        match self {
            ContentType::Journey => json!({
                "description": "An exciting journey through breathtaking landscapes and cultural experiences.",
                "duration": "7 Days",
                "difficulty": "Moderate",
                "activities": "Trekking, Photography, Cultural Visits",
                "category": "Adventure",
                "image_prompt": "Beautiful mountain landscape with travelers hiking",
            }),
            ContentType::Experience => json!({
                "description": "An unforgettable experience that combines adventure with local culture.",
                "duration": "Full Day",
                "group_size": "4-12 people",
                "price": "₹3,500 per person",
                "highlights": "Expert guide, Local cuisine, Photography spots",
                "category": "Culture",
                "image_prompt": "Group of travelers enjoying a cultural experience",
            }),
            ContentType::Package | ContentType::BlogPost => json!({
                "excerpt": "Discover the perfect travel package for your next adventure.",
                "content": "This package includes everything you need for an unforgettable journey, from accommodation to guided tours.",
                "category": "Adventure",
                "author": "Travel Expert",
                "author_bio": "Seasoned traveler with 10+ years of experience",
                "tags": "Travel, Adventure, Package",
                "read_time": "5 min read",
                "image_prompt": "Travel package brochure with beautiful destination photos",
            }),
            ContentType::DaySchedule => json!({
                "title": "Day of exploration",
                "description": "A full day on the trail with time to rest and take in the views.",
            }),
            ContentType::ResortActivity => json!({
                "description": "Enjoy a relaxing activity at our resort.",
                "full_description": "This activity offers a perfect way to unwind and enjoy your stay. Suitable for all ages and skill levels.",
                "icon": "Mountain",
                "image_prompt": "Resort activity in a beautiful natural setting",
            }),
            ContentType::ResortPackage => json!({
                "duration": "2 Days / 1 Night",
                "price": "₹8,999",
                "original_price": "₹12,999",
                "description": "A perfect getaway package with all amenities included.",
                "includes": "Accommodation\nAll meals\nGuided activities\nTransportation\nWelcome drink",
                "features": "Luxury accommodation\nGourmet dining\nSpa access\nAdventure activities",
                "badge": "Popular",
                "image_prompt": "Luxury resort package presentation",
            }),
            ContentType::Destination => json!({
                "description": "A beautiful destination in the Himalayan region offering breathtaking views and cultural experiences.",
                "duration": "5-7 days",
                "difficulty": "Moderate",
                "best_time": "March to May, September to November",
                "altitude": "2,000-4,000 meters",
                "category": "Adventure",
                "highlights": "Mountain views, Local culture, Trekking routes",
                "overview": "This destination offers a blend of natural beauty and cultural richness, with experiences ranging from challenging treks to quiet cultural visits.",
            }),
            ContentType::Place => json!({
                "name": "Scenic Viewpoint",
                "description": "A beautiful viewpoint offering panoramic views of the surrounding mountains.",
                "highlights": ["Panoramic views", "Great for photography", "Accessible location"],
            }),
            ContentType::Activity => json!({
                "title": "1. Mountain Trekking",
                "description": "Experience the thrill of trekking through beautiful mountain trails with expert guides.",
            }),
            ContentType::Itinerary => json!([{
                "day": 1,
                "title": "Arrival and Acclimatization",
                "activities": [
                    "Arrive at destination",
                    "Check into accommodation",
                    "Light walk around town",
                    "Evening cultural show",
                ],
            }]),
            ContentType::Faq => json!([{
                "question": "What is the best time to visit?",
                "answer": "Spring (March to May) and autumn (September to November), when the weather is pleasant and skies are clear.",
            }]),
            ContentType::TravelInfo => json!({
                "details": [
                    "Nearest airport: Tribhuvan International Airport",
                    "Flight duration: 30-45 minutes from Kathmandu",
                    "Best to book tickets in advance",
                ],
            }),
            ContentType::Season => json!({
                "season": "Winter (December-February)",
                "weather": "Cold with occasional snowfall",
                "why_visit": "Fewer crowds, beautiful snow-capped mountains",
                "events": "Christmas, New Year celebrations",
                "challenges": "Cold temperatures, possible road closures",
            }),
            ContentType::Accommodation => json!({
                "description": "Comfortable lodging options suitable for budget travelers",
                "options": ["Local guesthouses", "Budget hotels", "Homestays"],
            }),
            ContentType::TravelTips => json!({
                "tips": ["Pack warm clothing", "Stay hydrated", "Respect local customs", "Carry necessary permits"],
            }),
        }
    }
}

/// Extract the JSON payload from a model reply.
///
/// Strips Markdown code fences, then parses the outermost span of whichever
/// bracket opens first. The other bracket kind is tried if that span fails.
pub fn parse_reply(reply: &str) -> Option<Value> {
    let cleaned = strip_fences(reply.trim());

    let object_first = match (cleaned.find('{'), cleaned.find('[')) {
        (Some(brace), Some(bracket)) => brace < bracket,
        (Some(_), None) => true,
        _ => false,
    };
    let spans = if object_first {
        [('{', '}'), ('[', ']')]
    } else {
        [('[', ']'), ('{', '}')]
    };

    spans
        .iter()
        .filter_map(|&(open, close)| outer_span(cleaned, open, close))
        .find_map(|candidate| serde_json::from_str(candidate).ok())
}

fn strip_fences(text: &str) -> &str {
    let body = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}

fn outer_span(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fenced_reply() {
        let reply = "```json\n{\"duration\": \"7 Days\"}\n```";
        assert_eq!(parse_reply(reply), Some(json!({"duration": "7 Days"})));
    }

    #[test]
    fn test_parse_reply_with_prose() {
        let reply = "Sure! Here it is: {\"question\": \"Visa?\", \"answer\": \"On arrival.\"} Enjoy.";
        assert_eq!(
            parse_reply(reply),
            Some(json!({"question": "Visa?", "answer": "On arrival."}))
        );
    }

    #[test]
    fn test_parse_array_reply() {
        let reply = "```\n[{\"day\": 1, \"title\": \"Arrive\"}]\n```";
        assert_eq!(parse_reply(reply), Some(json!([{"day": 1, "title": "Arrive"}])));
    }

    #[test]
    fn test_parse_multi_item_array_reply() {
        let reply = r#"[{"day":1,"title":"Arrive"},{"day":2,"title":"Trek"}]"#;
        assert_eq!(
            parse_reply(reply),
            Some(json!([{"day": 1, "title": "Arrive"}, {"day": 2, "title": "Trek"}]))
        );

        let generated = GeneratedContent::from_reply(ContentType::Itinerary, reply);
        assert!(generated.suggestions.is_empty());
        assert_eq!(generated.content[1]["title"], "Trek");
    }

    #[test]
    fn test_parse_object_containing_array() {
        let reply = r#"Here: {"tips": ["Pack light", "Hydrate"]}"#;
        assert_eq!(parse_reply(reply), Some(json!({"tips": ["Pack light", "Hydrate"]})));
    }

    #[test]
    fn test_parse_reply_without_json() {
        assert_eq!(parse_reply("I cannot help with that."), None);
        assert_eq!(parse_reply("} backwards {"), None);
        assert_eq!(parse_reply("{not json}"), None);
    }

    #[test]
    fn test_from_reply_uses_fallback() {
        let generated = GeneratedContent::from_reply(ContentType::ResortPackage, "no json here");
        assert_eq!(generated.content["badge"], "Popular");
        assert_eq!(generated.suggestions, vec![GENERATION_FALLBACK_SUGGESTION.to_string()]);
    }

    #[test]
    fn test_from_reply_success_has_no_suggestions() {
        let generated =
            GeneratedContent::from_reply(ContentType::Faq, r#"{"question": "Q", "answer": "A"}"#);
        assert!(generated.suggestions.is_empty());
        assert_eq!(generated.content["answer"], "A");
    }

    #[test]
    fn test_prompt_mentions_title_and_shape() {
        let prompt = ContentType::Journey.prompt("Everest Base Camp");
        assert!(prompt.contains("\"Everest Base Camp\""));
        assert!(prompt.contains("\"activities\""));
        assert!(prompt.contains("Pilgrimage"));
    }

    #[test]
    fn test_content_type_wire_names() {
        let parsed: ContentType = serde_json::from_str("\"resortPackage\"").unwrap();
        assert_eq!(parsed, ContentType::ResortPackage);
        assert_eq!(serde_json::to_string(&ContentType::DaySchedule).unwrap(), "\"daySchedule\"");
    }
}
