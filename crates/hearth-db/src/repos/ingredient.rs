//! Recipe ingredient repository.
//!
//! At most one row exists per (recipe, item). Adding an item that is already
//! present adds the quantities with exact decimal arithmetic.

use hearth_core::entities::RecipeIngredient;
use hearth_core::enums::EntityType;
use hearth_core::errors::CoreError;
use hearth_core::identity::CallerContext;
use hearth_core::ids::PREFIX_INGREDIENT;
use hearth_core::validate::{optional_text, parse_quantity};

use crate::error::{DatabaseError, conflict_on_unique};
use crate::helpers::{
    decimal_to_text, get_opt_string, now, parse_datetime, parse_decimal, timestamp,
};
use crate::service::HearthService;
use crate::updates::ingredient::IngredientUpdate;

/// Ingredient columns with `ri` aliasing `recipe_ingredients`.
pub(crate) const INGREDIENT_COLS: &str =
    "ri.id, ri.recipe_id, ri.item_id, ri.quantity, ri.unit_override, ri.created_at, ri.updated_at";

pub(crate) fn row_to_ingredient(row: &libsql::Row) -> Result<RecipeIngredient, DatabaseError> {
    Ok(RecipeIngredient {
        id: row.get(0)?,
        recipe_id: row.get(1)?,
        item_id: row.get(2)?,
        quantity: parse_decimal(&row.get::<String>(3)?)?,
        unit_override: get_opt_string(row, 4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
        updated_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl HearthService {
    /// Add `item_id` to a recipe, merging with an existing row for the same item.
    ///
    /// On merge the quantities are summed and the unit override is replaced.
    /// The lookup and the write run in one immediate transaction; a concurrent
    /// insert of the same pair surfaces as a conflict.
    pub async fn add_ingredient(
        &self,
        caller: &CallerContext,
        recipe_id: &str,
        item_id: &str,
        quantity: &str,
        unit_override: Option<&str>,
    ) -> Result<RecipeIngredient, DatabaseError> {
        let house_id = caller.require_house()?;
        self.fetch_recipe(house_id, recipe_id).await?;
        self.fetch_item(house_id, item_id).await?;
        let qty = parse_quantity(quantity)?;
        let unit_override = optional_text(unit_override);

        let new_id = self.db().generate_id(PREFIX_INGREDIENT).await?;
        let now = timestamp(now());

        let tx = self
            .db()
            .conn()
            .transaction_with_behavior(libsql::TransactionBehavior::Immediate)
            .await?;

        let mut rows = tx
            .query(
                "SELECT id, quantity FROM recipe_ingredients WHERE recipe_id = ?1 AND item_id = ?2",
                libsql::params![recipe_id, item_id],
            )
            .await?;
        let existing = match rows.next().await? {
            Some(row) => Some((row.get::<String>(0)?, parse_decimal(&row.get::<String>(1)?)?)),
            None => None,
        };
        drop(rows);

        let ingredient_id = if let Some((id, current)) = existing {
            let merged = current + &qty;
            tx.execute(
                "UPDATE recipe_ingredients SET quantity = ?1, unit_override = ?2, updated_at = ?3 \
                 WHERE id = ?4",
                libsql::params![
                    decimal_to_text(&merged),
                    unit_override.as_deref(),
                    now.as_str(),
                    id.as_str()
                ],
            )
            .await?;
            tracing::debug!(ingredient_id = %id, quantity = %merged, "ingredient merged");
            id
        } else {
            tx.execute(
                "INSERT INTO recipe_ingredients \
                 (id, recipe_id, item_id, quantity, unit_override, created_at, updated_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                libsql::params![
                    new_id.as_str(),
                    recipe_id,
                    item_id,
                    decimal_to_text(&qty),
                    unit_override.as_deref(),
                    now.as_str(),
                    now.as_str()
                ],
            )
            .await
            .map_err(|e| {
                conflict_on_unique(e, || {
                    format!("item {item_id} was added to recipe {recipe_id} concurrently")
                })
            })?;
            new_id
        };

        tx.commit().await?;
        self.fetch_ingredient(house_id, recipe_id, &ingredient_id).await
    }

    /// Change an ingredient's quantity and/or unit override.
    pub async fn update_ingredient(
        &self,
        caller: &CallerContext,
        recipe_id: &str,
        ingredient_id: &str,
        update: IngredientUpdate,
    ) -> Result<RecipeIngredient, DatabaseError> {
        let house_id = caller.require_house()?;
        if update.is_empty() {
            return Err(CoreError::validation("no fields to update").into());
        }
        self.fetch_ingredient(house_id, recipe_id, ingredient_id).await?;

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref quantity) = update.quantity {
            sets.push(format!("quantity = ?{idx}"));
            params.push(decimal_to_text(&parse_quantity(quantity)?).into());
            idx += 1;
        }
        if let Some(ref unit_override) = update.unit_override {
            sets.push(format!("unit_override = ?{idx}"));
            params.push(
                optional_text(unit_override.as_deref()).map_or(libsql::Value::Null, Into::into),
            );
            idx += 1;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(timestamp(now()).into());
        idx += 1;

        params.push(ingredient_id.into());
        let sql = format!("UPDATE recipe_ingredients SET {} WHERE id = ?{idx}", sets.join(", "));
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        self.fetch_ingredient(house_id, recipe_id, ingredient_id).await
    }

    pub async fn remove_ingredient(
        &self,
        caller: &CallerContext,
        recipe_id: &str,
        ingredient_id: &str,
    ) -> Result<(), DatabaseError> {
        let house_id = caller.require_house()?;
        self.fetch_ingredient(house_id, recipe_id, ingredient_id).await?;

        self.db()
            .conn()
            .execute("DELETE FROM recipe_ingredients WHERE id = ?1", [ingredient_id])
            .await?;
        Ok(())
    }

    /// The ingredient must belong to `recipe_id`, which must belong to `house_id`.
    async fn fetch_ingredient(
        &self,
        house_id: &str,
        recipe_id: &str,
        ingredient_id: &str,
    ) -> Result<RecipeIngredient, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {INGREDIENT_COLS} FROM recipe_ingredients ri \
                     JOIN recipes r ON r.id = ri.recipe_id \
                     WHERE ri.id = ?1 AND ri.recipe_id = ?2 AND r.house_id = ?3"
                ),
                libsql::params![ingredient_id, recipe_id, house_id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| CoreError::not_found(EntityType::Ingredient.as_str(), ingredient_id))?;
        row_to_ingredient(&row)
    }
}
