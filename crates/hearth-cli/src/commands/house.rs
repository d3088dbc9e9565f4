use crate::cli::GlobalFlags;
use crate::cli::subcommands::HouseCommands;
use crate::context::AppContext;
use crate::output::{Ack, output};

/// Handle `hearth house`.
pub async fn handle(
    action: &HouseCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let caller = ctx.caller().await?;
    match action {
        HouseCommands::Create { name } => {
            let house = ctx.service.create_house(&caller, name).await?;
            output(&house, flags.format)
        }
        HouseCommands::Join { id } => {
            let house = ctx.service.join_house(&caller, id).await?;
            output(&house, flags.format)
        }
        HouseCommands::Leave => {
            ctx.service.leave_house(&caller).await?;
            output(&Ack::new("house.leave", caller.house_id.as_deref()), flags.format)
        }
        HouseCommands::Show => {
            let detail = ctx.service.get_house(&caller).await?;
            output(&detail, flags.format)
        }
    }
}
