use crate::cli::GlobalFlags;
use crate::cli::subcommands::ShoppingCommands;
use crate::context::AppContext;
use crate::output::{Ack, output};

/// Handle `hearth shopping`.
pub async fn handle(
    action: &ShoppingCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let caller = ctx.caller().await?;
    match action {
        ShoppingCommands::Create { title } => {
            let list = ctx.service.create_list(&caller, title).await?;
            output(&list, flags.format)
        }
        ShoppingCommands::List { archived } => {
            let lists = ctx.service.list_lists(&caller, *archived).await?;
            output(&lists, flags.format)
        }
        ShoppingCommands::Show { id } => {
            let detail = ctx.service.get_list(&caller, id).await?;
            output(&detail, flags.format)
        }
        ShoppingCommands::Add {
            list,
            item,
            quantity,
            unit,
            note,
        } => {
            let line = ctx
                .service
                .add_line(&caller, list, item, quantity, unit.as_deref(), note.as_deref())
                .await?;
            output(&line, flags.format)
        }
        ShoppingCommands::Remove { list, line } => {
            ctx.service.remove_line(&caller, list, line).await?;
            output(&Ack::new("shopping.remove", Some(line)), flags.format)
        }
        ShoppingCommands::Archive { id } => {
            let list = ctx.service.archive_list(&caller, id).await?;
            output(&list, flags.format)
        }
    }
}
