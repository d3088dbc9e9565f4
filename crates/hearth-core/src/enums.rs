//! Recipe types, chore frequencies, and entity kinds for Hearth.
//!
//! Stored and serialized enums use upper-case wire values
//! (`#[serde(rename_all = "SCREAMING_SNAKE_CASE")]`), matching what clients
//! send (`"MEAL"`, `"WEEKLY"`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// RecipeType
// ---------------------------------------------------------------------------

/// Kind of recipe. Suggestions and searches can be filtered by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecipeType {
    Meal,
    Dessert,
}

impl RecipeType {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Meal => "MEAL",
            Self::Dessert => "DESSERT",
        }
    }
}

impl fmt::Display for RecipeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ChoreFrequency
// ---------------------------------------------------------------------------

/// How often a chore recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChoreFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ChoreFrequency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "DAILY",
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
        }
    }
}

impl fmt::Display for ChoreFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Every persisted entity kind. Used in not-found errors and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    User,
    House,
    Item,
    Recipe,
    Ingredient,
    ShoppingList,
    ShoppingLine,
    Chore,
    ChoreCompletion,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::House => "house",
            Self::Item => "item",
            Self::Recipe => "recipe",
            Self::Ingredient => "ingredient",
            Self::ShoppingList => "shopping_list",
            Self::ShoppingLine => "shopping_line",
            Self::Chore => "chore",
            Self::ChoreCompletion => "chore_completion",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
