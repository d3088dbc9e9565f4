use hearth_db::updates::ingredient::IngredientUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{Ack, output};

pub async fn add(
    recipe_id: &str,
    item_id: &str,
    quantity: &str,
    unit: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let caller = ctx.caller().await?;
    let ingredient = ctx
        .service
        .add_ingredient(&caller, recipe_id, item_id, quantity, unit)
        .await?;
    output(&ingredient, flags.format)
}

pub struct UpdateParams {
    pub quantity: Option<String>,
    pub unit: Option<String>,
    pub clear_unit: bool,
}

pub async fn update(
    recipe_id: &str,
    ingredient_id: &str,
    params: UpdateParams,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if params.quantity.is_none() && params.unit.is_none() && !params.clear_unit {
        anyhow::bail!("At least one of --quantity, --unit, or --clear-unit must be provided");
    }
    let caller = ctx.caller().await?;

    let mut builder = IngredientUpdateBuilder::new();
    if let Some(quantity) = params.quantity {
        builder = builder.quantity(quantity);
    }
    if params.clear_unit {
        builder = builder.unit_override(None);
    } else if let Some(unit) = params.unit {
        builder = builder.unit_override(Some(unit));
    }

    let ingredient = ctx
        .service
        .update_ingredient(&caller, recipe_id, ingredient_id, builder.build())
        .await?;
    output(&ingredient, flags.format)
}

pub async fn remove(
    recipe_id: &str,
    ingredient_id: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let caller = ctx.caller().await?;
    ctx.service
        .remove_ingredient(&caller, recipe_id, ingredient_id)
        .await?;
    output(
        &Ack::new("recipe.remove-ingredient", Some(ingredient_id)),
        flags.format,
    )
}
