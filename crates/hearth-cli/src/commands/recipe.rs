mod ingredient;
mod search;
mod suggest;
mod update;

use hearth_core::enums::RecipeType;
use hearth_db::repos::recipe::NewRecipe;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RecipeCommands;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::{Ack, output};

/// Handle `hearth recipe`.
pub async fn handle(
    action: &RecipeCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        RecipeCommands::Create {
            title,
            recipe_type,
            tags,
            notes,
            text,
        } => {
            let caller = ctx.caller().await?;
            let input = NewRecipe {
                tags: tags.clone(),
                notes: notes.clone(),
                text: text.clone(),
                ..NewRecipe::new(title.as_str(), parse_enum::<RecipeType>(recipe_type, "type")?)
            };
            let recipe = ctx.service.create_recipe(&caller, &input).await?;
            output(&recipe, flags.format)
        }
        RecipeCommands::Get { id } => {
            let caller = ctx.caller().await?;
            let detail = ctx.service.get_recipe(&caller, id).await?;
            output(&detail, flags.format)
        }
        RecipeCommands::Update {
            id,
            title,
            recipe_type,
            tags,
            clear_tags,
            notes,
            clear_notes,
            text,
            clear_text,
        } => {
            let params = update::Params {
                id: id.clone(),
                title: title.clone(),
                recipe_type: recipe_type.clone(),
                tags: tags.clone(),
                clear_tags: *clear_tags,
                notes: notes.clone(),
                clear_notes: *clear_notes,
                text: text.clone(),
                clear_text: *clear_text,
            };
            update::run(params, ctx, flags).await
        }
        RecipeCommands::Delete { id } => {
            let caller = ctx.caller().await?;
            ctx.service.delete_recipe(&caller, id).await?;
            output(&Ack::new("recipe.delete", Some(id)), flags.format)
        }
        RecipeCommands::AddIngredient {
            recipe,
            item,
            quantity,
            unit,
        } => ingredient::add(recipe, item, quantity, unit.as_deref(), ctx, flags).await,
        RecipeCommands::UpdateIngredient {
            recipe,
            ingredient,
            quantity,
            unit,
            clear_unit,
        } => {
            let params = ingredient::UpdateParams {
                quantity: quantity.clone(),
                unit: unit.clone(),
                clear_unit: *clear_unit,
            };
            ingredient::update(recipe, ingredient, params, ctx, flags).await
        }
        RecipeCommands::RemoveIngredient { recipe, ingredient } => {
            ingredient::remove(recipe, ingredient, ctx, flags).await
        }
        RecipeCommands::Search {
            query,
            recipe_type,
            tags,
            item,
            page,
            page_size,
        } => {
            let params = search::Params {
                query: query.clone(),
                recipe_type: recipe_type.clone(),
                tags: tags.clone(),
                item: item.clone(),
                page: *page,
                page_size: *page_size,
            };
            search::run(params, ctx, flags).await
        }
        RecipeCommands::Suggest {
            have,
            recipe_type,
            missing,
        } => suggest::run(have, recipe_type.as_deref(), *missing, ctx, flags).await,
    }
}
