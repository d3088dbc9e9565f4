//! Recipe repository: CRUD plus the batch hydration shared with suggestions.

use std::collections::HashMap;

use hearth_core::entities::{IngredientDetail, Recipe, RecipeDetail};
use hearth_core::enums::{EntityType, RecipeType};
use hearth_core::errors::CoreError;
use hearth_core::identity::CallerContext;
use hearth_core::ids::PREFIX_RECIPE;
use hearth_core::validate::{normalize_tags, optional_text, require_text};

use crate::error::DatabaseError;
use crate::helpers::{
    fold_case, get_opt_string, id_list_json, now, parse_datetime, parse_enum, parse_tags,
    tags_to_json, timestamp,
};
use crate::repos::ingredient::{INGREDIENT_COLS, row_to_ingredient};
use crate::repos::item::{ITEM_REF_COLS, row_to_item_ref};
use crate::service::HearthService;
use crate::updates::recipe::RecipeUpdate;

pub(crate) const RECIPE_COLS: &str =
    "id, house_id, title, type, tags, notes, text, created_at, updated_at";

/// Input for [`HearthService::create_recipe`].
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub title: String,
    pub recipe_type: RecipeType,
    pub tags: Vec<String>,
    pub notes: Option<String>,
    pub text: Option<String>,
}

impl NewRecipe {
    #[must_use]
    pub fn new(title: impl Into<String>, recipe_type: RecipeType) -> Self {
        Self {
            title: title.into(),
            recipe_type,
            tags: Vec::new(),
            notes: None,
            text: None,
        }
    }
}

fn row_to_recipe(row: &libsql::Row) -> Result<Recipe, DatabaseError> {
    Ok(Recipe {
        id: row.get(0)?,
        house_id: row.get(1)?,
        title: row.get(2)?,
        recipe_type: parse_enum(&row.get::<String>(3)?)?,
        tags: parse_tags(&row.get::<String>(4)?)?,
        notes: get_opt_string(row, 5)?,
        text: get_opt_string(row, 6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

impl HearthService {
    pub async fn create_recipe(
        &self,
        caller: &CallerContext,
        input: &NewRecipe,
    ) -> Result<Recipe, DatabaseError> {
        let house_id = caller.require_house()?;
        let title = require_text(&input.title, "title")?;
        let tags = normalize_tags(&input.tags);
        let notes = optional_text(input.notes.as_deref());
        let text = optional_text(input.text.as_deref());

        let now = now();
        let id = self.db().generate_id(PREFIX_RECIPE).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO recipes ({RECIPE_COLS}, title_folded, text_folded) \
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)"
                ),
                libsql::params![
                    id.as_str(),
                    house_id,
                    title.as_str(),
                    input.recipe_type.as_str(),
                    tags_to_json(&tags)?,
                    notes.as_deref(),
                    text.as_deref(),
                    timestamp(now),
                    timestamp(now),
                    fold_case(&title),
                    fold_case(text.as_deref().unwrap_or_default())
                ],
            )
            .await?;

        tracing::debug!(recipe_id = %id, recipe_type = %input.recipe_type, "recipe created");
        Ok(Recipe {
            id,
            house_id: house_id.to_string(),
            title,
            recipe_type: input.recipe_type,
            tags,
            notes,
            text,
            created_at: now,
            updated_at: now,
        })
    }

    /// A recipe with its ingredients ordered by creation time.
    pub async fn get_recipe(
        &self,
        caller: &CallerContext,
        id: &str,
    ) -> Result<RecipeDetail, DatabaseError> {
        let house_id = caller.require_house()?;
        let mut details = self.load_recipe_details(house_id, &[id.to_string()]).await?;
        details
            .remove(id)
            .ok_or_else(|| CoreError::not_found(EntityType::Recipe.as_str(), id).into())
    }

    /// Apply the set fields of `update`. An update with nothing set is rejected.
    pub async fn update_recipe(
        &self,
        caller: &CallerContext,
        id: &str,
        update: RecipeUpdate,
    ) -> Result<Recipe, DatabaseError> {
        let house_id = caller.require_house()?;
        if update.is_empty() {
            return Err(CoreError::validation("no fields to update").into());
        }
        self.fetch_recipe(house_id, id).await?;

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref title) = update.title {
            let title = require_text(title, "title")?;
            sets.push(format!("title = ?{idx}, title_folded = ?{}", idx + 1));
            let folded = fold_case(&title);
            params.push(title.into());
            params.push(folded.into());
            idx += 2;
        }
        if let Some(recipe_type) = update.recipe_type {
            sets.push(format!("type = ?{idx}"));
            params.push(recipe_type.as_str().into());
            idx += 1;
        }
        if let Some(ref tags) = update.tags {
            sets.push(format!("tags = ?{idx}"));
            params.push(tags_to_json(&normalize_tags(tags))?.into());
            idx += 1;
        }
        if let Some(ref notes) = update.notes {
            sets.push(format!("notes = ?{idx}"));
            params.push(optional_text(notes.as_deref()).map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(ref text) = update.text {
            let text = optional_text(text.as_deref());
            sets.push(format!("text = ?{idx}, text_folded = ?{}", idx + 1));
            let folded = fold_case(text.as_deref().unwrap_or_default());
            params.push(text.map_or(libsql::Value::Null, Into::into));
            params.push(folded.into());
            idx += 2;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(timestamp(now()).into());
        idx += 1;

        params.push(id.into());
        let sql = format!("UPDATE recipes SET {} WHERE id = ?{idx}", sets.join(", "));
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        self.fetch_recipe(house_id, id).await
    }

    /// Delete a recipe; its ingredient rows go with it.
    pub async fn delete_recipe(
        &self,
        caller: &CallerContext,
        id: &str,
    ) -> Result<(), DatabaseError> {
        let house_id = caller.require_house()?;
        self.fetch_recipe(house_id, id).await?;

        self.db()
            .conn()
            .execute("DELETE FROM recipes WHERE id = ?1", [id])
            .await?;
        tracing::debug!(recipe_id = %id, "recipe deleted");
        Ok(())
    }

    /// Look up a recipe inside `house_id`; other houses' recipes are not found.
    pub(crate) async fn fetch_recipe(
        &self,
        house_id: &str,
        id: &str,
    ) -> Result<Recipe, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {RECIPE_COLS} FROM recipes WHERE id = ?1 AND house_id = ?2"),
                libsql::params![id, house_id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| CoreError::not_found(EntityType::Recipe.as_str(), id))?;
        row_to_recipe(&row)
    }

    /// Fetch full recipe records for `ids` in one round trip per table.
    ///
    /// The map is unordered; ids that are missing or outside `house_id` are
    /// simply absent.
    pub(crate) async fn load_recipe_details(
        &self,
        house_id: &str,
        ids: &[String],
    ) -> Result<HashMap<String, RecipeDetail>, DatabaseError> {
        let mut details = HashMap::with_capacity(ids.len());
        if ids.is_empty() {
            return Ok(details);
        }

        let id_list = id_list_json(ids)?;

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {RECIPE_COLS} FROM recipes \
                     WHERE house_id = ?1 AND id IN (SELECT value FROM json_each(?2))"
                ),
                libsql::params![house_id, id_list.as_str()],
            )
            .await?;
        while let Some(row) = rows.next().await? {
            let recipe = row_to_recipe(&row)?;
            details.insert(
                recipe.id.clone(),
                RecipeDetail {
                    recipe,
                    ingredients: Vec::new(),
                },
            );
        }

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {INGREDIENT_COLS}, {ITEM_REF_COLS} \
                     FROM recipe_ingredients ri \
                     JOIN recipes r ON r.id = ri.recipe_id \
                     JOIN items i ON i.id = ri.item_id \
                     WHERE r.house_id = ?1 \
                     AND ri.recipe_id IN (SELECT value FROM json_each(?2)) \
                     ORDER BY ri.created_at ASC, ri.id ASC"
                ),
                libsql::params![house_id, id_list.as_str()],
            )
            .await?;
        while let Some(row) = rows.next().await? {
            let ingredient = row_to_ingredient(&row)?;
            let item = row_to_item_ref(&row, 7)?;
            if let Some(detail) = details.get_mut(&ingredient.recipe_id) {
                detail.ingredients.push(IngredientDetail { ingredient, item });
            }
        }

        Ok(details)
    }
}
