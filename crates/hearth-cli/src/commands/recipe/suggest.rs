use hearth_core::enums::RecipeType;
use hearth_db::repos::suggest::SuggestRequest;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_opt_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    have: &[String],
    recipe_type: Option<&str>,
    missing: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let caller = ctx.caller().await?;
    let request = SuggestRequest {
        available_item_ids: have.to_vec(),
        recipe_type: parse_opt_enum::<RecipeType>(recipe_type, "type")?,
        limit: Some(effective_limit(
            None,
            flags.limit,
            ctx.config.general.default_limit,
        )),
        missing,
    };

    let suggestions = ctx.service.suggest_recipes(&caller, &request).await?;
    tracing::debug!(count = suggestions.len(), "recipe suggestions ready");
    output(&suggestions, flags.format)
}
