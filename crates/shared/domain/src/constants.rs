//! Domain-level constants.
//!
//! These constants define content defaults and validation requirements.

// =============================================================================
// Tables
// =============================================================================

pub const TABLE_DESTINATIONS: &str = "destinations";
pub const TABLE_JOURNEYS: &str = "journeys";
pub const TABLE_JOURNEY_DAYS: &str = "journey_days";
pub const TABLE_PACKAGES: &str = "packages";
pub const TABLE_EXPERIENCES: &str = "experiences";
pub const TABLE_RESORT_ACTIVITIES: &str = "resort_activities";
pub const TABLE_RESORT_PACKAGES: &str = "resort_packages";
pub const TABLE_RESORT_GALLERY: &str = "resort_gallery";
pub const TABLE_CATEGORIES: &str = "categories";
pub const TABLE_ENQUIRIES: &str = "enquiries";

/// Every table that publishes change notifications
pub const WATCHED_TABLES: &[&str] = &[
    TABLE_DESTINATIONS,
    TABLE_JOURNEYS,
    TABLE_JOURNEY_DAYS,
    TABLE_PACKAGES,
    TABLE_EXPERIENCES,
    TABLE_RESORT_ACTIVITIES,
    TABLE_RESORT_PACKAGES,
    TABLE_RESORT_GALLERY,
    TABLE_CATEGORIES,
    TABLE_ENQUIRIES,
];

/// Check if a table name can be watched for changes
pub fn is_watched_table(table: &str) -> bool {
    WATCHED_TABLES.contains(&table)
}

// =============================================================================
// Content Defaults
// =============================================================================

/// Categories seeded when none exist yet
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Trekking",
    "Wildlife",
    "Culture",
    "Adventure",
    "Pilgrimage",
    "Nature",
];

/// Icon used for resort activities created without one
pub const DEFAULT_ACTIVITY_ICON: &str = "Mountain";

/// Highest day number a journey schedule accepts
pub const MAX_DAY_NUMBER: i32 = 365;

/// Read time used for posts created without one
pub const DEFAULT_READ_TIME: &str = "5 min read";

/// Status of a freshly submitted enquiry
pub const ENQUIRY_STATUS_NEW: &str = "new";

/// Valid enquiry status values
pub const VALID_ENQUIRY_STATUSES: &[&str] = &[ENQUIRY_STATUS_NEW, "contacted", "closed"];

/// Check if an enquiry status value is valid
pub fn is_valid_enquiry_status(status: &str) -> bool {
    VALID_ENQUIRY_STATUSES.contains(&status)
}

// =============================================================================
// Nested Items
// =============================================================================

/// Key prefix for array items that carry no id of their own
pub const SYNTHETIC_KEY_PREFIX: &str = "item_";

/// Alphabet for the random part of generated item ids
pub const ITEM_ID_ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Length of the random part of generated item ids
pub const ITEM_ID_RANDOM_LENGTH: usize = 9;

// =============================================================================
// Media
// =============================================================================

/// Length of the random segment in storage keys
pub const STORAGE_KEY_RANDOM_LENGTH: usize = 6;

/// File name marker of placeholder images that are never stored remotely
pub const PLACEHOLDER_IMAGE: &str = "placeholder.svg";

/// Prefix of images embedded inline in a record
pub const DATA_URL_PREFIX: &str = "data:";

// =============================================================================
// Validation
// =============================================================================

/// Message prefix for missing required fields
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";

/// Suggestion attached to generated content when the reply could not be parsed
pub const GENERATION_FALLBACK_SUGGESTION: &str = "AI generation failed, using fallback content";
