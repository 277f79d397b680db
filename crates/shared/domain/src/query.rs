//! Query parameters shared by list endpoints.

use serde::Deserialize;

/// Default number of posts in the recent feed
pub const DEFAULT_RECENT_LIMIT: u64 = 3;

/// Maximum number of posts in the recent feed
pub const MAX_RECENT_LIMIT: u64 = 50;

/// Filter for featured-capable collections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
pub struct ListFilter {
    /// Only featured (true) or only non-featured (false) items
    pub featured: Option<bool>,
}

/// Size of a "most recent" listing
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
pub struct RecentQuery {
    pub limit: Option<u64>,
}

impl RecentQuery {
    /// Requested limit clamped to `1..=MAX_RECENT_LIMIT`
    pub fn limit(&self) -> u64 {
        self.limit
            .unwrap_or(DEFAULT_RECENT_LIMIT)
            .clamp(1, MAX_RECENT_LIMIT)
    }
}
