//! Journey entity and its day-by-day schedule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::MAX_DAY_NUMBER;
use crate::error::{DomainError, DomainResult};
use crate::lists::ListInput;
use crate::validation::{non_blank, require_fields};

/// Journey domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Journey {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub difficulty: String,
    pub activities: Vec<String>,
    pub featured: bool,
    pub category: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Journey create/update payload
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct JourneyInput {
    #[validate(length(min = 1, message = "Title is required"))]
    #[cfg_attr(feature = "openapi", schema(example = "Everest Base Camp Trek"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Duration is required"))]
    #[cfg_attr(feature = "openapi", schema(example = "14 Days"))]
    pub duration: String,
    #[validate(length(min = 1, message = "Difficulty is required"))]
    pub difficulty: String,
    /// Array or comma separated text
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<String>))]
    pub activities: ListInput,
    #[serde(default)]
    pub featured: bool,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Journey {
    /// Build a new journey from a validated payload.
    pub fn create(input: JourneyInput) -> DomainResult<Self> {
        let now = Utc::now();
        Self::build(Uuid::new_v4(), now, now, input)
    }

    /// Replace all editable fields with the payload.
    pub fn apply(&mut self, input: JourneyInput) -> DomainResult<()> {
        *self = Self::build(self.id, self.created_at, Utc::now(), input)?;
        Ok(())
    }

    fn build(
        id: Uuid,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        input: JourneyInput,
    ) -> DomainResult<Self> {
        require_fields(&[
            ("title", &input.title),
            ("description", &input.description),
            ("duration", &input.duration),
            ("difficulty", &input.difficulty),
            ("category", &input.category),
        ])?;

        Ok(Self {
            id,
            title: input.title.trim().to_string(),
            description: input.description.trim().to_string(),
            duration: input.duration.trim().to_string(),
            difficulty: input.difficulty.trim().to_string(),
            activities: input.activities.comma_separated(),
            featured: input.featured,
            category: input.category.trim().to_string(),
            image_url: non_blank(input.image_url),
            created_at,
            updated_at,
        })
    }
}

/// One day of a journey's schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct JourneyDay {
    pub id: Uuid,
    pub journey_id: Uuid,
    pub day_number: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Journey day create/update payload
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct JourneyDayInput {
    /// Next free day number when omitted
    #[serde(default)]
    #[validate(range(min = 1, max = 365, message = "Day number must be between 1 and 365"))]
    pub day_number: Option<i32>,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "Fly to Lukla, trek to Phakding"))]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl JourneyDay {
    /// Build a new day. `existing` holds the journey's current days.
    pub fn create(
        journey_id: Uuid,
        input: JourneyDayInput,
        existing: &[JourneyDay],
    ) -> DomainResult<Self> {
        let day_number = match input.day_number {
            Some(n) => check_day_number(n)?,
            None => next_day_number(existing)?,
        };
        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4(),
            journey_id,
            day_number,
            title: non_blank(input.title),
            description: non_blank(input.description),
            image_url: non_blank(input.image_url),
            created_at: now,
            updated_at: now,
        })
    }

    /// Update the day; an omitted day number keeps the current one.
    pub fn apply(&mut self, input: JourneyDayInput) -> DomainResult<()> {
        if let Some(n) = input.day_number {
            self.day_number = check_day_number(n)?;
        }
        self.title = non_blank(input.title);
        self.description = non_blank(input.description);
        self.image_url = non_blank(input.image_url);
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// Day number following the highest existing one (1 for an empty schedule).
pub fn next_day_number(days: &[JourneyDay]) -> DomainResult<i32> {
    let last = days.iter().map(|d| d.day_number).max().unwrap_or(0);
    last.checked_add(1)
        .ok_or_else(|| DomainError::validation(DAY_NUMBER_RANGE_MESSAGE))
        .and_then(check_day_number)
}

const DAY_NUMBER_RANGE_MESSAGE: &str = "Day number must be between 1 and 365";

fn check_day_number(n: i32) -> DomainResult<i32> {
    if (1..=MAX_DAY_NUMBER).contains(&n) {
        Ok(n)
    } else {
        Err(DomainError::validation(DAY_NUMBER_RANGE_MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(journey_id: Uuid, number: i32) -> JourneyDay {
        JourneyDay::create(
            journey_id,
            JourneyDayInput {
                day_number: Some(number),
                ..Default::default()
            },
            &[],
        )
        .unwrap()
    }

    #[test]
    fn test_create_journey_splits_activities() {
        let journey = Journey::create(JourneyInput {
            title: "Everest Base Camp Trek".into(),
            description: "Walk to the foot of the world's highest peak".into(),
            duration: "14 Days".into(),
            difficulty: "Challenging".into(),
            activities: ListInput::from("Trekking, Photography, Cultural Visits"),
            category: "Trekking".into(),
            image_url: Some(String::new()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(journey.activities, vec!["Trekking", "Photography", "Cultural Visits"]);
        assert_eq!(journey.image_url, None);
    }

    #[test]
    fn test_create_journey_requires_title() {
        let result = Journey::create(JourneyInput::default());
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_next_day_number() {
        let journey_id = Uuid::new_v4();
        assert_eq!(next_day_number(&[]).unwrap(), 1);
        assert_eq!(
            next_day_number(&[day(journey_id, 1), day(journey_id, 4), day(journey_id, 2)]).unwrap(),
            5
        );
    }

    #[test]
    fn test_next_day_number_past_last_allowed_day() {
        let journey_id = Uuid::new_v4();
        let mut last = day(journey_id, 1);
        last.day_number = i32::MAX;

        let result = JourneyDay::create(journey_id, JourneyDayInput::default(), &[last]);
        assert!(matches!(result, Err(DomainError::Validation(_))));

        let full = day(journey_id, MAX_DAY_NUMBER);
        let result = JourneyDay::create(journey_id, JourneyDayInput::default(), &[full]);
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_day_number_above_range_is_rejected() {
        let result = JourneyDay::create(
            Uuid::new_v4(),
            JourneyDayInput {
                day_number: Some(MAX_DAY_NUMBER + 1),
                ..Default::default()
            },
            &[],
        );
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_create_day_assigns_next_number() {
        let journey_id = Uuid::new_v4();
        let existing = vec![day(journey_id, 1), day(journey_id, 2)];

        let created = JourneyDay::create(
            journey_id,
            JourneyDayInput {
                title: Some("Rest day in Namche".into()),
                ..Default::default()
            },
            &existing,
        )
        .unwrap();

        assert_eq!(created.day_number, 3);
        assert_eq!(created.title.as_deref(), Some("Rest day in Namche"));
    }

    #[test]
    fn test_day_number_must_be_positive() {
        let result = JourneyDay::create(
            Uuid::new_v4(),
            JourneyDayInput {
                day_number: Some(0),
                ..Default::default()
            },
            &[],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_keeps_day_number_when_omitted() {
        let mut existing = day(Uuid::new_v4(), 3);
        existing
            .apply(JourneyDayInput {
                description: Some("Acclimatization hike".into()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(existing.day_number, 3);
        assert_eq!(existing.description.as_deref(), Some("Acclimatization hike"));
    }
}
