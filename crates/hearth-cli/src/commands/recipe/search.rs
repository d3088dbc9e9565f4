use hearth_core::enums::RecipeType;
use hearth_db::repos::search::RecipeSearch;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_opt_enum;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub query: Option<String>,
    pub recipe_type: Option<String>,
    pub tags: Vec<String>,
    pub item: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let caller = ctx.caller().await?;
    let search = build_search(params, ctx.config.general.default_page_size)?;
    let page = ctx.service.search_recipes(&caller, &search).await?;
    output(&page, flags.format)
}

/// `--page-size` is passed through as given; clamping happens in
/// [`RecipeSearch::paging`]. Only an absent flag falls back to the config.
fn build_search(params: Params, default_page_size: u32) -> anyhow::Result<RecipeSearch> {
    Ok(RecipeSearch {
        q: params.query,
        recipe_type: parse_opt_enum::<RecipeType>(params.recipe_type.as_deref(), "type")?,
        tags_any: params.tags,
        has_item_id: params.item,
        page: params.page,
        page_size: params.page_size.or(Some(default_page_size)),
    })
}
