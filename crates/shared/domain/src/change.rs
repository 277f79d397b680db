//! Row change notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of row change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeKind::Insert => write!(f, "insert"),
            ChangeKind::Update => write!(f, "update"),
            ChangeKind::Delete => write!(f, "delete"),
        }
    }
}

/// A committed change to one row. Clients re-fetch on receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ChangeEvent {
    pub table: String,
    pub kind: ChangeKind,
    pub id: Uuid,
    pub at: DateTime<Utc>,
}

impl ChangeEvent {
    pub fn new(table: &str, kind: ChangeKind, id: Uuid) -> Self {
        Self {
            table: table.to_string(),
            kind,
            id,
            at: Utc::now(),
        }
    }

    pub fn inserted(table: &str, id: Uuid) -> Self {
        Self::new(table, ChangeKind::Insert, id)
    }

    pub fn updated(table: &str, id: Uuid) -> Self {
        Self::new(table, ChangeKind::Update, id)
    }

    pub fn deleted(table: &str, id: Uuid) -> Self {
        Self::new(table, ChangeKind::Delete, id)
    }
}
