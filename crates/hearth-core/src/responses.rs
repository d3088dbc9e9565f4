//! Response types for Hearth query operations.
//!
//! Each struct is the shape a caller receives from search or suggestion.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{RecipeDetail, RecipeSummary};

/// How well a recipe is covered by an availability set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MatchStats {
    /// Distinct available items among the recipe's ingredients.
    pub matched: u32,
    /// Total ingredient count.
    pub total: u32,
    /// `total - matched`.
    pub missing: u32,
    /// `matched / total`, or 0 when the recipe has no ingredients.
    pub match_pct: f64,
}

/// A hydrated recipe ranked by ingredient coverage.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RecipeSuggestion {
    #[serde(flatten)]
    pub recipe: RecipeDetail,
    #[serde(rename = "match")]
    pub match_stats: MatchStats,
}

/// One page of plain recipe search results.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RecipeSearchPage {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub items: Vec<RecipeSummary>,
}
