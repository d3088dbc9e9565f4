use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ChoreFrequency;

/// A recurring house chore, optionally assigned to a member.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Chore {
    pub id: String,
    pub house_id: String,
    pub title: String,
    pub frequency: ChoreFrequency,
    pub assigned_to_id: Option<String>,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Record of a member completing a chore.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChoreCompletion {
    pub id: String,
    pub chore_id: String,
    pub completed_by_id: String,
    pub note: Option<String>,
    pub completed_at: DateTime<Utc>,
}
