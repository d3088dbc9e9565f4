use hearth_db::repos::item::{ItemFilter, NewItem};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ItemCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `hearth item`.
pub async fn handle(
    action: &ItemCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let caller = ctx.caller().await?;
    match action {
        ItemCommands::Add {
            name,
            category,
            unit,
            tags,
        } => {
            let input = NewItem::new(name.as_str(), category.as_str(), unit.as_str())
                .with_tags(tags.clone());
            let item = ctx.service.add_item(&caller, &input).await?;
            output(&item, flags.format)
        }
        ItemCommands::List {
            search,
            category,
            archived,
        } => {
            let filter = ItemFilter {
                q: search.clone(),
                category: category.clone(),
                archived: *archived,
            };
            let mut items = ctx.service.list_items(&caller, &filter).await?;
            if let Some(limit) = flags.limit.filter(|&n| n > 0) {
                items.truncate(usize::try_from(limit)?);
            }
            output(&items, flags.format)
        }
        ItemCommands::Get { id } => {
            let item = ctx.service.get_item(&caller, id).await?;
            output(&item, flags.format)
        }
        ItemCommands::Archive { id } => {
            let item = ctx.service.archive_item(&caller, id).await?;
            output(&item, flags.format)
        }
    }
}
