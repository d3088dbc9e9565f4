use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ItemRef;
use crate::enums::RecipeType;

/// A house recipe.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Recipe {
    pub id: String,
    pub house_id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub recipe_type: RecipeType,
    pub tags: Vec<String>,
    pub notes: Option<String>,
    pub text: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One (recipe, item) link. At most one row exists per pair; adding the same
/// item again merges quantities.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RecipeIngredient {
    pub id: String,
    pub recipe_id: String,
    pub item_id: String,
    /// Exact decimal, strictly positive.
    #[schemars(with = "String")]
    pub quantity: BigDecimal,
    /// Supersedes the item's default unit for this recipe.
    pub unit_override: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Ingredient row with its item's catalog fields.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IngredientDetail {
    #[serde(flatten)]
    pub ingredient: RecipeIngredient,
    pub item: ItemRef,
}

/// Recipe with its ingredients ordered by creation time.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RecipeDetail {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub ingredients: Vec<IngredientDetail>,
}

/// Listing projection returned by recipe search.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub recipe_type: RecipeType,
    pub tags: Vec<String>,
    pub text: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
