use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ItemRef;

/// A named shopping list. Titles are unique per house.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ShoppingList {
    pub id: String,
    pub house_id: String,
    pub title: String,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One (list, item) line. Duplicate adds merge quantities.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ShoppingLine {
    pub id: String,
    pub list_id: String,
    pub item_id: String,
    #[schemars(with = "String")]
    pub quantity: BigDecimal,
    pub unit_override: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ShoppingLineDetail {
    #[serde(flatten)]
    pub line: ShoppingLine,
    pub item: ItemRef,
}

/// List with its lines ordered by creation time.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ShoppingListDetail {
    #[serde(flatten)]
    pub list: ShoppingList,
    pub lines: Vec<ShoppingLineDetail>,
}

/// List plus its line count, for overviews.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ShoppingListSummary {
    #[serde(flatten)]
    pub list: ShoppingList,
    pub line_count: u32,
}
