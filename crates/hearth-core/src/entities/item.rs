use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A catalog entry of the house inventory. Unique by name within its house.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub house_id: String,
    pub name: String,
    pub category: String,
    pub unit: String,
    pub tags: Vec<String>,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Item fields embedded in ingredient and shopping line details.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ItemRef {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub category: String,
    pub tags: Vec<String>,
}
