//! Recipe suggestion by ingredient coverage.
//!
//! Two read-only aggregates feed the pure ranking in `hearth_core::matching`:
//! per-recipe coverage of the available items, and per-recipe ingredient
//! totals (LEFT JOIN, so recipes without ingredients count with total 0).
//! The ranked ids are then hydrated and returned in ranked order.

use std::collections::HashMap;

use hearth_core::entities::RecipeDetail;
use hearth_core::enums::RecipeType;
use hearth_core::identity::CallerContext;
use hearth_core::matching::{
    DEFAULT_ALLOWED_MISSING, DEFAULT_SUGGEST_LIMIT, RankedRecipe, rank_candidates,
    sanitize_item_ids,
};
use hearth_core::responses::RecipeSuggestion;

use crate::error::DatabaseError;
use crate::helpers::{get_count, id_list_json};
use crate::service::HearthService;

/// Input for [`HearthService::suggest_recipes`].
#[derive(Debug, Clone, Default)]
pub struct SuggestRequest {
    /// Items the house has on hand. Duplicates and blanks are ignored.
    pub available_item_ids: Vec<String>,
    pub recipe_type: Option<RecipeType>,
    /// Maximum results; `None` or 0 means 20.
    pub limit: Option<u32>,
    /// Missing ingredients tolerated per recipe; defaults to 0.
    pub missing: Option<u32>,
}

impl SuggestRequest {
    #[must_use]
    pub fn effective_limit(&self) -> u32 {
        self.limit.filter(|&l| l > 0).unwrap_or(DEFAULT_SUGGEST_LIMIT)
    }

    #[must_use]
    pub fn allowed_missing(&self) -> u32 {
        self.missing.unwrap_or(DEFAULT_ALLOWED_MISSING)
    }
}

/// Pair ranked ids with their hydrated records, keeping ranked order.
///
/// Ids missing from `details` (deleted between ranking and hydration) are skipped.
fn attach_matches(
    ranked: Vec<RankedRecipe>,
    mut details: HashMap<String, RecipeDetail>,
) -> Vec<RecipeSuggestion> {
    let mut suggestions = Vec::with_capacity(ranked.len());
    for candidate in ranked {
        match details.remove(&candidate.recipe_id) {
            Some(recipe) => suggestions.push(RecipeSuggestion {
                recipe,
                match_stats: candidate.stats,
            }),
            None => {
                tracing::warn!(
                    recipe_id = %candidate.recipe_id,
                    "ranked recipe vanished before hydration; skipping"
                );
            }
        }
    }
    suggestions
}

impl HearthService {
    /// Rank the caller's recipes by how well `available_item_ids` cover them.
    ///
    /// An empty (after sanitising) availability set returns an empty list
    /// without querying.
    pub async fn suggest_recipes(
        &self,
        caller: &CallerContext,
        request: &SuggestRequest,
    ) -> Result<Vec<RecipeSuggestion>, DatabaseError> {
        let house_id = caller.require_house()?;

        let item_ids = sanitize_item_ids(&request.available_item_ids);
        if item_ids.is_empty() {
            tracing::debug!(house_id, "no available items; nothing to suggest");
            return Ok(Vec::new());
        }

        let coverage = self
            .ingredient_coverage(house_id, &item_ids, request.recipe_type)
            .await?;
        let totals = self.ingredient_totals(house_id, request.recipe_type).await?;

        let ranked = rank_candidates(
            &coverage,
            &totals,
            request.allowed_missing(),
            request.effective_limit(),
        );
        tracing::debug!(
            house_id,
            available = item_ids.len(),
            candidates = totals.len(),
            ranked = ranked.len(),
            "recipe suggestion ranked"
        );
        if ranked.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = ranked.iter().map(|r| r.recipe_id.clone()).collect();
        let details = self.load_recipe_details(house_id, &ids).await?;
        Ok(attach_matches(ranked, details))
    }

    /// recipe id -> number of distinct `item_ids` among its ingredients.
    ///
    /// Only recipes with at least one match appear.
    pub(crate) async fn ingredient_coverage(
        &self,
        house_id: &str,
        item_ids: &[String],
        recipe_type: Option<RecipeType>,
    ) -> Result<HashMap<String, u32>, DatabaseError> {
        let mut params: Vec<libsql::Value> = vec![house_id.into()];
        let mut type_clause = String::new();
        if let Some(recipe_type) = recipe_type {
            type_clause = " AND r.type = ?2".to_string();
            params.push(recipe_type.as_str().into());
        }
        let ids_idx = params.len() + 1;
        params.push(id_list_json(item_ids)?.into());

        let sql = format!(
            "SELECT ri.recipe_id, COUNT(DISTINCT ri.item_id) \
             FROM recipe_ingredients ri \
             JOIN recipes r ON r.id = ri.recipe_id \
             WHERE r.house_id = ?1{type_clause} \
             AND ri.item_id IN (SELECT value FROM json_each(?{ids_idx})) \
             GROUP BY ri.recipe_id"
        );
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut coverage = HashMap::new();
        while let Some(row) = rows.next().await? {
            coverage.insert(row.get::<String>(0)?, get_count(&row, 1)?);
        }
        Ok(coverage)
    }

    /// recipe id -> ingredient count for every recipe in scope, zero included.
    pub(crate) async fn ingredient_totals(
        &self,
        house_id: &str,
        recipe_type: Option<RecipeType>,
    ) -> Result<HashMap<String, u32>, DatabaseError> {
        let mut params: Vec<libsql::Value> = vec![house_id.into()];
        let mut type_clause = String::new();
        if let Some(recipe_type) = recipe_type {
            type_clause = " AND r.type = ?2".to_string();
            params.push(recipe_type.as_str().into());
        }

        let sql = format!(
            "SELECT r.id, COUNT(ri.item_id) \
             FROM recipes r \
             LEFT JOIN recipe_ingredients ri ON ri.recipe_id = r.id \
             WHERE r.house_id = ?1{type_clause} \
             GROUP BY r.id"
        );
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut totals = HashMap::new();
        while let Some(row) = rows.next().await? {
            totals.insert(row.get::<String>(0)?, get_count(&row, 1)?);
        }
        Ok(totals)
    }
}
